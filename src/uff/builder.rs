//! Per-block dataset builders and their selection from the number line

use log::debug;

use super::ascii::Ascii58Builder;
use super::binary::Binary58Builder;
use super::error::Result;
use super::models::UffDataset;

const NUMBER_LINE_58: &str = "    58";
const NUMBER_LINE_58B: &str = "    58b";

/// What the tokenizer should fetch next for a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum NextUnit {
    /// The next record is an ASCII line.
    Line,
    /// The next record is a raw binary blob of exactly this many bytes.
    Binary(usize),
}

/// The decoder driving one dataset block.
pub(super) enum DatasetBuilder {
    Ascii(Ascii58Builder),
    Binary(Binary58Builder),
    /// Unrecognized dataset type: records are consumed and discarded.
    Skip,
}

impl DatasetBuilder {
    /// Pick a builder from the number line following a block delimiter.
    ///
    /// The exact `    58` comparison must run before the `    58b` prefix
    /// check; both lines begin with the same six characters.
    pub(super) fn select(number_line: &str) -> Result<Self> {
        let trimmed = number_line.trim_end();
        if trimmed.eq_ignore_ascii_case(NUMBER_LINE_58) {
            Ok(Self::Ascii(Ascii58Builder::new()))
        } else if starts_with_ignore_case(number_line, NUMBER_LINE_58B) {
            Ok(Self::Binary(Binary58Builder::from_number_line(number_line)?))
        } else {
            debug!("skipping unrecognized dataset type: {:?}", trimmed);
            Ok(Self::Skip)
        }
    }

    pub(super) fn add_line(&mut self, line: &str) -> Result<NextUnit> {
        match self {
            Self::Ascii(builder) => builder.add_line(line),
            Self::Binary(builder) => builder.add_line(line),
            Self::Skip => Ok(NextUnit::Line),
        }
    }

    pub(super) fn add_binary(&mut self, data: &[u8]) -> Result<NextUnit> {
        match self {
            Self::Binary(builder) => builder.add_binary(data),
            // Only the binary builder ever requests a blob.
            Self::Ascii(_) | Self::Skip => Ok(NextUnit::Line),
        }
    }

    pub(super) fn build(self) -> Option<UffDataset> {
        match self {
            Self::Ascii(builder) => Some(UffDataset::Number58(builder.build())),
            Self::Binary(builder) => Some(UffDataset::Number58(builder.build())),
            Self::Skip => None,
        }
    }
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.len() >= prefix.len()
        && line.is_char_boundary(prefix.len())
        && line[..prefix.len()].eq_ignore_ascii_case(prefix)
}
