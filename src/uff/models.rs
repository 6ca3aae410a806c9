//! Data structures representing decoded UFF datasets

use super::error::UffError;

/// A decoded UFF dataset, tagged by its dataset number.
///
/// Dataset 58 is the only type this crate decodes today; blocks of other
/// recognized-in-principle types are skipped by the reader.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum UffDataset {
    Number58(Number58Dataset),
}

impl UffDataset {
    pub fn as_number58(&self) -> Option<&Number58Dataset> {
        match self {
            Self::Number58(dataset) => Some(dataset),
        }
    }
}

/// A dataset 58 function record: one measurement function (time series,
/// spectrum, FRF, ...) with its axis metadata.
#[derive(Debug, Clone, Default)]
pub struct Number58Dataset {
    /// The five free-form ID lines, stored verbatim.
    pub headers: [String; 5],
    pub function_identification: FunctionIdentification,
    pub data_kind: DataKind,
    /// Point count declared by record 7. Well-formed input has
    /// `data.len()` equal to this, but the reader does not enforce it.
    pub data_count: i64,
    /// When false, point indices are implicit: minimum + i * spacing.
    pub abscissa_is_uneven: bool,
    pub abscissa_minimum: f64,
    pub abscissa_spacing: f64,
    pub z_axis_value: f64,
    pub abscissa_characteristics: AxisDataCharacteristics,
    pub ordinate_characteristics: AxisDataCharacteristics,
    pub ordinate_denominator_characteristics: AxisDataCharacteristics,
    pub z_axis_characteristics: AxisDataCharacteristics,
    pub data: Vec<DataPoint>,
}

/// One decoded function sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Abscissa value: running for evenly spaced data, explicit otherwise.
    pub index: f64,
    pub real: f64,
    /// NaN for real-valued functions.
    pub imaginary: f64,
}

/// Ordinate precision and complexity, from record 7 of a dataset 58 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataKind {
    #[default]
    RealSingle,
    RealDouble,
    ComplexSingle,
    ComplexDouble,
}

impl DataKind {
    pub fn is_complex(self) -> bool {
        matches!(self, Self::ComplexSingle | Self::ComplexDouble)
    }

    pub fn is_double_precision(self) -> bool {
        matches!(self, Self::RealDouble | Self::ComplexDouble)
    }
}

impl TryFrom<i64> for DataKind {
    type Error = UffError;

    fn try_from(code: i64) -> Result<Self, UffError> {
        match code {
            2 => Ok(Self::RealSingle),
            4 => Ok(Self::RealDouble),
            5 => Ok(Self::ComplexSingle),
            6 => Ok(Self::ComplexDouble),
            _ => Err(UffError::UnsupportedDataKind(code)),
        }
    }
}

/// Identification of the measured function, from record 6.
#[derive(Debug, Clone, Default)]
pub struct FunctionIdentification {
    pub function_type: FunctionType,
    pub number: i32,
    pub version_or_sequence: i32,
    pub response_entity_name: String,
    pub response_node: i32,
    pub response_direction: i32,
    pub reference_entity_name: String,
    pub reference_node: i32,
    pub reference_direction: i32,
}

/// Function type code table of record 6.
///
/// Codes outside the table are preserved in `Other` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionType {
    #[default]
    GeneralOrUnknown,
    TimeResponse,
    AutoSpectrum,
    CrossSpectrum,
    FrequencyResponseFunction,
    Transmissibility,
    Coherence,
    AutoCorrelation,
    CrossCorrelation,
    PowerSpectralDensity,
    EnergySpectralDensity,
    ProbabilityDensityFunction,
    Spectrum,
    CumulativeFrequencyDistribution,
    Other(i32),
}

impl From<i32> for FunctionType {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::GeneralOrUnknown,
            1 => Self::TimeResponse,
            2 => Self::AutoSpectrum,
            3 => Self::CrossSpectrum,
            4 => Self::FrequencyResponseFunction,
            5 => Self::Transmissibility,
            6 => Self::Coherence,
            7 => Self::AutoCorrelation,
            8 => Self::CrossCorrelation,
            9 => Self::PowerSpectralDensity,
            10 => Self::EnergySpectralDensity,
            11 => Self::ProbabilityDensityFunction,
            12 => Self::Spectrum,
            13 => Self::CumulativeFrequencyDistribution,
            other => Self::Other(other),
        }
    }
}

/// Axis metadata from records 8 through 11.
#[derive(Debug, Clone, Default)]
pub struct AxisDataCharacteristics {
    pub data_type: AxisDataType,
    pub length_unit_exponent: i32,
    pub force_unit_exponent: i32,
    pub temperature_unit_exponent: i32,
    pub label: String,
    pub unit: String,
}

/// Specific data type code table of the axis characteristic records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisDataType {
    #[default]
    Unknown,
    General,
    Stress,
    Strain,
    Temperature,
    HeatFlux,
    Displacement,
    ReactionForce,
    Velocity,
    Acceleration,
    ExcitationForce,
    Pressure,
    Mass,
    Time,
    Frequency,
    Rpm,
    Order,
    SoundPressure,
    Other(i32),
}

impl From<i32> for AxisDataType {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::General,
            2 => Self::Stress,
            3 => Self::Strain,
            5 => Self::Temperature,
            6 => Self::HeatFlux,
            8 => Self::Displacement,
            9 => Self::ReactionForce,
            11 => Self::Velocity,
            12 => Self::Acceleration,
            13 => Self::ExcitationForce,
            15 => Self::Pressure,
            16 => Self::Mass,
            17 => Self::Time,
            18 => Self::Frequency,
            19 => Self::Rpm,
            20 => Self::Order,
            21 => Self::SoundPressure,
            other => Self::Other(other),
        }
    }
}

/// Floating-point encoding declared by a 58b number line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatFormat {
    DecVms,
    Ieee754,
    Ibm370,
    Other(i64),
}

impl From<i64> for FloatFormat {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::DecVms,
            2 => Self::Ieee754,
            3 => Self::Ibm370,
            other => Self::Other(other),
        }
    }
}
