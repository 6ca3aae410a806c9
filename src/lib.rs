//! # uff-reader
//!
//! A reader for Universal File Format (UFF) measurement files, decoding
//! Dataset 58 function records (time series, spectra, FRFs) in both their
//! ASCII and binary-payload ("58b") forms.
//!
//! Datasets are pulled lazily from the source, so large files can be
//! processed incrementally and a decode failure only discards the dataset
//! in flight.
pub mod uff;

// Re-export the main types for convenience
pub use uff::{
    error::{Result, UffError},
    models::{
        AxisDataCharacteristics, AxisDataType, DataKind, DataPoint, FloatFormat,
        FunctionIdentification, FunctionType, Number58Dataset, UffDataset,
    },
    Datasets, UffReader,
};
