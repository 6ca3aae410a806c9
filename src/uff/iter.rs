//! Lazy iteration over decoded datasets

use std::io::Read;

use log::trace;

use super::error::Result;
use super::models::UffDataset;
use super::reader::UffReader;

/// Iterator over the datasets of a [`UffReader`], in file order.
///
/// Yields `Result<UffDataset>`. The first error is yielded once and the
/// iteration then ends; datasets already yielded stay with the caller, so
/// a failure late in a file does not discard earlier results.
///
/// Created by [`UffReader::datasets`].
pub struct Datasets<'a, R> {
    reader: &'a mut UffReader<R>,
    done: bool,
}

impl<'a, R: Read> Datasets<'a, R> {
    pub(super) fn new(reader: &'a mut UffReader<R>) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: Read> Iterator for Datasets<'_, R> {
    type Item = Result<UffDataset>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_dataset() {
            Ok(Some(dataset)) => {
                trace!("decoded one dataset");
                Some(Ok(dataset))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
