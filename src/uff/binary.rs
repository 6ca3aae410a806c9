//! Binary payload decoding for the 58b dataset variant

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::ascii::Ascii58Builder;
use super::builder::NextUnit;
use super::error::{Result, UffError};
use super::fields;
use super::models::{DataPoint, FloatFormat, Number58Dataset};

/// Decoder for `    58b` blocks: eleven ASCII header records, then a
/// single length-prefixed binary payload holding every data point.
pub(super) struct Binary58Builder {
    inner: Ascii58Builder,
    little_endian: bool,
    float_format: FloatFormat,
    byte_count: usize,
    payload_consumed: bool,
}

impl Binary58Builder {
    /// Parse the trailing fixed columns of the 58b number line.
    // Format(I6,1A1,I6,I6,I12,I12,I6,I6,I12,I12)
    pub(super) fn from_number_line(number_line: &str) -> Result<Self> {
        let little_endian = fields::parse_int(number_line, 7, 6)? == 1;
        let float_format = FloatFormat::from(fields::parse_int(number_line, 13, 6)?);
        let header_records = fields::parse_int(number_line, 19, 12)?;
        if header_records != 11 {
            return Err(UffError::UnexpectedHeaderRecordCount(header_records));
        }
        let declared = fields::parse_int(number_line, 31, 12)?;
        let byte_count =
            usize::try_from(declared).map_err(|_| UffError::InvalidNumericField {
                text: declared.to_string(),
                column: 31,
                width: 12,
            })?;
        Ok(Self {
            inner: Ascii58Builder::new(),
            little_endian,
            float_format,
            byte_count,
            payload_consumed: false,
        })
    }

    pub(super) fn add_line(&mut self, line: &str) -> Result<NextUnit> {
        if self.payload_consumed || self.inner.record >= 11 {
            // Nothing but the closing delimiter should follow the payload.
            return Ok(NextUnit::Line);
        }
        self.inner.add_record(line)?;
        if self.inner.record == 11 {
            // All eleven header records are in; the payload comes next.
            Ok(NextUnit::Binary(self.byte_count))
        } else {
            Ok(NextUnit::Line)
        }
    }

    pub(super) fn add_binary(&mut self, data: &[u8]) -> Result<NextUnit> {
        if self.float_format != FloatFormat::Ieee754 {
            return Err(UffError::UnsupportedFloatFormat(self.float_format));
        }
        match (
            self.inner.dataset.data_kind.is_complex(),
            self.inner.dataset.abscissa_is_uneven,
        ) {
            (false, false) => self.decode_real_even(data)?,
            (false, true) => self.decode_real_uneven(data)?,
            (true, false) => self.decode_complex_even(data)?,
            (true, true) => return Err(UffError::ComplexUnevenAbscissa),
        }
        self.payload_consumed = true;
        Ok(NextUnit::Line)
    }

    pub(super) fn build(self) -> Number58Dataset {
        self.inner.build()
    }

    fn decode_real_even(&mut self, data: &[u8]) -> Result<()> {
        let width = self.value_width();
        ensure_whole_points(data.len(), width)?;
        for point in data.chunks_exact(width) {
            let value = self.read_float(point);
            self.inner.push_even_point(value, f64::NAN);
        }
        Ok(())
    }

    fn decode_real_uneven(&mut self, data: &[u8]) -> Result<()> {
        // An explicit single-precision index precedes each value.
        let width = 4 + self.value_width();
        ensure_whole_points(data.len(), width)?;
        for point in data.chunks_exact(width) {
            let index = self.read_float(&point[..4]);
            let value = self.read_float(&point[4..]);
            self.inner.dataset.data.push(DataPoint {
                index,
                real: value,
                imaginary: f64::NAN,
            });
        }
        Ok(())
    }

    fn decode_complex_even(&mut self, data: &[u8]) -> Result<()> {
        let width = self.value_width();
        ensure_whole_points(data.len(), 2 * width)?;
        for point in data.chunks_exact(2 * width) {
            let real = self.read_float(&point[..width]);
            let imaginary = self.read_float(&point[width..]);
            self.inner.push_even_point(real, imaginary);
        }
        Ok(())
    }

    fn value_width(&self) -> usize {
        if self.inner.dataset.data_kind.is_double_precision() {
            8
        } else {
            4
        }
    }

    /// Reinterpret one 4- or 8-byte field with the declared byte order.
    fn read_float(&self, bytes: &[u8]) -> f64 {
        match (bytes.len(), self.little_endian) {
            (4, true) => f64::from(LittleEndian::read_f32(bytes)),
            (4, false) => f64::from(BigEndian::read_f32(bytes)),
            (8, true) => LittleEndian::read_f64(bytes),
            _ => BigEndian::read_f64(bytes),
        }
    }
}

fn ensure_whole_points(length: usize, point_width: usize) -> Result<()> {
    if length % point_width != 0 {
        return Err(UffError::InvalidBinaryLength {
            length,
            point_width,
        });
    }
    Ok(())
}
