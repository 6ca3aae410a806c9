//! Core UFF reader module

pub mod error;
pub mod models;
mod ascii;
mod binary;
mod builder;
mod chunk;
mod fields;
mod iter;
mod reader;

pub use iter::Datasets;
pub use reader::UffReader;
