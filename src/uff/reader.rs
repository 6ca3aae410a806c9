//! Decoding session over a UFF byte source

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use encoding_rs::Encoding;
use log::{debug, info};

use super::builder::{DatasetBuilder, NextUnit};
use super::chunk::ChunkReader;
use super::error::{Result, UffError};
use super::iter::Datasets;
use super::models::UffDataset;

/// A dataset block delimiter: four spaces and `-1`.
const DATASET_DELIMITER: &str = "    -1";

/// A decoding session over a UFF byte source.
///
/// Datasets are pulled lazily through [`UffReader::datasets`], so large
/// files can be processed incrementally; a decode failure ends the
/// iteration but leaves datasets yielded earlier with the caller.
///
/// One reader owns its buffer and cursor state and is driven through
/// `&mut self`; wrap it in external synchronization if it must be shared.
pub struct UffReader<R> {
    input: ChunkReader<R>,
    encoding: &'static Encoding,
    cancel: Option<Arc<AtomicBool>>,
}

impl UffReader<File> {
    /// Open a UFF file from the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("opening UFF file: {}", path.display());
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> UffReader<R> {
    /// Wrap an arbitrary byte source.
    ///
    /// Record lines are decoded as Windows-1252; use
    /// [`UffReader::with_encoding`] for another single-byte encoding.
    /// Dropping the reader drops the source; [`UffReader::into_inner`]
    /// hands it back instead.
    pub fn new(source: R) -> Self {
        Self {
            input: ChunkReader::new(source),
            encoding: encoding_rs::WINDOWS_1252,
            cancel: None,
        }
    }

    /// Wrap a byte source, decoding record lines with the named encoding.
    ///
    /// Only single-byte encodings keep the fixed column positions of the
    /// format intact, so any other label is rejected.
    pub fn with_encoding(source: R, label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.as_bytes())
            .filter(|encoding| encoding.is_single_byte())
            .ok_or_else(|| UffError::UnsupportedEncoding(label.to_string()))?;
        let mut reader = Self::new(source);
        reader.encoding = encoding;
        Ok(reader)
    }

    /// Install a flag that aborts the read between records when raised.
    ///
    /// The flag is checked once per unit, never inside a binary payload,
    /// and trips the read with [`UffError::Cancelled`].
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Lazily iterate the datasets in the source, in file order.
    ///
    /// Blocks with an unrecognized dataset type are skipped and yield
    /// nothing. The iteration is single-pass and not restartable.
    pub fn datasets(&mut self) -> Datasets<'_, R> {
        Datasets::new(self)
    }

    /// Decode every remaining dataset into a vector.
    pub fn read_all(&mut self) -> Result<Vec<UffDataset>> {
        self.datasets().collect()
    }

    /// Consume the session and hand back the underlying byte source.
    pub fn into_inner(self) -> R {
        self.input.into_inner()
    }

    /// Decode the next recognized dataset block, skipping unrecognized
    /// ones. `None` once the source holds no further complete block.
    pub(super) fn next_dataset(&mut self) -> Result<Option<UffDataset>> {
        loop {
            if !self.find_delimiter()? {
                return Ok(None);
            }
            let Some(number_line) = self.read_line()? else {
                return Ok(None);
            };
            let mut builder = DatasetBuilder::select(&number_line)?;
            let mut next_unit = NextUnit::Line;
            loop {
                self.check_cancelled()?;
                match next_unit {
                    NextUnit::Line => {
                        let Some(line) = self.read_line()? else {
                            // Source ended inside a block: no dataset.
                            debug!("source ended before the dataset block was closed");
                            return Ok(None);
                        };
                        if is_delimiter(&line) {
                            break;
                        }
                        next_unit = builder.add_line(&line)?;
                    }
                    NextUnit::Binary(count) => {
                        let blob = self.input.read_exact(count)?;
                        next_unit = builder.add_binary(&blob)?;
                    }
                }
            }
            if let Some(dataset) = builder.build() {
                return Ok(Some(dataset));
            }
        }
    }

    /// Skip lines until a dataset delimiter. False at end of source.
    fn find_delimiter(&mut self) -> Result<bool> {
        loop {
            self.check_cancelled()?;
            match self.read_line()? {
                None => return Ok(false),
                Some(line) if is_delimiter(&line) => return Ok(true),
                Some(_) => {}
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let Some(bytes) = self.input.read_line()? else {
            return Ok(None);
        };
        let (decoded, _) = self.encoding.decode_without_bom_handling(&bytes);
        Ok(Some(decoded.into_owned()))
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(UffError::Cancelled),
            _ => Ok(()),
        }
    }
}

fn is_delimiter(line: &str) -> bool {
    line.eq_ignore_ascii_case(DATASET_DELIMITER)
}
