//! Record state machine for ASCII dataset 58 blocks

use super::builder::NextUnit;
use super::error::{Result, UffError};
use super::fields;
use super::models::{
    AxisDataCharacteristics, AxisDataType, DataKind, DataPoint, FunctionType, Number58Dataset,
};

/// Builds one [`Number58Dataset`] from the records of an ASCII `    58`
/// block, fed one line at a time.
pub(super) struct Ascii58Builder {
    pub(super) dataset: Number58Dataset,
    /// Record cursor; saturates at 12, so every further line re-enters the
    /// data-line branch.
    pub(super) record: u8,
    /// Running abscissa value for evenly spaced data. Record 7 resets it
    /// to the abscissa minimum.
    abscissa_cursor: f64,
}

impl Ascii58Builder {
    pub(super) fn new() -> Self {
        Self {
            dataset: Number58Dataset::default(),
            record: 0,
            abscissa_cursor: 0.0,
        }
    }

    pub(super) fn add_line(&mut self, line: &str) -> Result<NextUnit> {
        self.add_record(line)?;
        Ok(NextUnit::Line)
    }

    /// Dispatch one record line. The binary 58b builder reuses records 1
    /// through 11 of this machine unchanged.
    pub(super) fn add_record(&mut self, line: &str) -> Result<()> {
        if self.record < 12 {
            self.record += 1;
        }
        match self.record {
            1..=5 => self.dataset.headers[usize::from(self.record) - 1] = line.to_string(),
            6 => self.parse_function_identification(line)?,
            7 => self.parse_data_form(line)?,
            8 => self.dataset.abscissa_characteristics = parse_axis_characteristics(line)?,
            9 => self.dataset.ordinate_characteristics = parse_axis_characteristics(line)?,
            10 => {
                self.dataset.ordinate_denominator_characteristics =
                    parse_axis_characteristics(line)?
            }
            11 => self.dataset.z_axis_characteristics = parse_axis_characteristics(line)?,
            _ => self.add_data_line(line)?,
        }
        Ok(())
    }

    pub(super) fn build(self) -> Number58Dataset {
        self.dataset
    }

    // Format(2(I5,I10),2(1X,10A1,I10,I4))
    fn parse_function_identification(&mut self, line: &str) -> Result<()> {
        let ident = &mut self.dataset.function_identification;
        ident.function_type = FunctionType::from(fields::parse_int(line, 0, 5)? as i32);
        ident.number = fields::parse_int(line, 5, 10)? as i32;
        ident.version_or_sequence = fields::parse_int(line, 15, 5)? as i32;
        ident.response_entity_name = name_field(line, 31)?;
        ident.response_node = fields::parse_int(line, 41, 10)? as i32;
        ident.response_direction = fields::parse_int(line, 51, 4)? as i32;
        ident.reference_entity_name = name_field(line, 56)?;
        ident.reference_node = fields::parse_int(line, 66, 10)? as i32;
        ident.reference_direction = fields::parse_int(line, 76, 4)? as i32;
        Ok(())
    }

    // Format(3I10,3E13.5)
    fn parse_data_form(&mut self, line: &str) -> Result<()> {
        self.dataset.data_kind = DataKind::try_from(fields::parse_int(line, 0, 10)?)?;
        self.dataset.data_count = fields::parse_int(line, 10, 10)?;
        // Spacing flag: 0 = uneven, nonzero = evenly spaced.
        self.dataset.abscissa_is_uneven = fields::parse_int(line, 20, 10)? == 0;
        self.dataset.abscissa_minimum = fields::parse_float(line, 30, 13)?;
        self.dataset.abscissa_spacing = fields::parse_float(line, 43, 13)?;
        self.dataset.z_axis_value = fields::parse_float(line, 56, 13)?;
        self.abscissa_cursor = self.dataset.abscissa_minimum;
        Ok(())
    }

    fn add_data_line(&mut self, line: &str) -> Result<()> {
        match (
            self.dataset.data_kind.is_complex(),
            self.dataset.abscissa_is_uneven,
        ) {
            (false, false) => self.add_real_even_line(line),
            (false, true) => self.add_real_uneven_line(line),
            (true, false) => self.add_complex_even_line(line),
            (true, true) => Err(UffError::ComplexUnevenAbscissa),
        }
    }

    // Format(6E13.5) single / Format(4E20.12) double
    fn add_real_even_line(&mut self, line: &str) -> Result<()> {
        let (points_per_line, width) = match self.dataset.data_kind {
            DataKind::RealSingle => (6, 13),
            _ => (4, 20),
        };
        let len = fields::char_len(line);
        for point in 0..points_per_line {
            if len < (point + 1) * width {
                break;
            }
            let value = fields::parse_float(line, point * width, width)?;
            self.push_even_point(value, f64::NAN);
        }
        Ok(())
    }

    // Format(3(E13.5,E13.5)) single / Format(2(E13.5,E20.12)) double
    fn add_real_uneven_line(&mut self, line: &str) -> Result<()> {
        let (points_per_line, mut width) = match self.dataset.data_kind {
            DataKind::RealSingle => (3, 26),
            _ => (2, 33),
        };
        let len = fields::char_len(line);
        // Only the double-precision layout carries the length check; a
        // single-precision line with a dangling fragment truncates like
        // every other short data line.
        if self.dataset.data_kind == DataKind::RealDouble {
            if len > width && len % width != 0 {
                // Tolerate abscissa values written in the wider E20.12 form.
                width = 40;
            }
            if len > width && len % width != 0 {
                return Err(UffError::InvalidDataLineLength(len));
            }
        }
        let index_width = width - 20;
        for point in 0..points_per_line {
            if len < (point + 1) * width {
                break;
            }
            let index = fields::parse_float(line, point * width, index_width)?;
            let value = fields::parse_float(line, point * width + index_width, 20)?;
            self.dataset.data.push(DataPoint {
                index,
                real: value,
                imaginary: f64::NAN,
            });
        }
        Ok(())
    }

    // Format(3(E13.5,E13.5)) single / Format(2(E20.12,E20.12)) double
    fn add_complex_even_line(&mut self, line: &str) -> Result<()> {
        let (points_per_line, width) = match self.dataset.data_kind {
            DataKind::ComplexSingle => (3, 13),
            _ => (2, 20),
        };
        let len = fields::char_len(line);
        for point in 0..points_per_line {
            if len < 2 * (point + 1) * width {
                break;
            }
            let real = fields::parse_float(line, 2 * point * width, width)?;
            let imaginary = fields::parse_float(line, (2 * point + 1) * width, width)?;
            self.push_even_point(real, imaginary);
        }
        Ok(())
    }

    /// Append a point at the running abscissa and advance it by the
    /// declared spacing.
    pub(super) fn push_even_point(&mut self, real: f64, imaginary: f64) {
        self.dataset.data.push(DataPoint {
            index: self.abscissa_cursor,
            real,
            imaginary,
        });
        self.abscissa_cursor += self.dataset.abscissa_spacing;
    }
}

// Format(I10,3I5,2(1X,20A1))
fn parse_axis_characteristics(line: &str) -> Result<AxisDataCharacteristics> {
    Ok(AxisDataCharacteristics {
        data_type: AxisDataType::from(fields::parse_int(line, 0, 10)? as i32),
        length_unit_exponent: fields::parse_int_or_zero(line, 10, 5)? as i32,
        force_unit_exponent: fields::parse_int_or_zero(line, 15, 5)? as i32,
        temperature_unit_exponent: fields::parse_int_or_zero(line, 20, 5)? as i32,
        label: fields::required(line, 26, 20)?.trim_end().to_string(),
        unit: fields::slice_to_end(line, 47, 20)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    })
}

fn name_field(line: &str, offset: usize) -> Result<String> {
    Ok(fields::required(line, offset, 10)?
        .trim_end_matches(' ')
        .to_string())
}
