//! Built-in datasets and external data loading.
//!
//! - default question set (`questions`)
//! - default and file-loaded income tables (`income`)
//! - calibration artifact file access (`calibration_file`)
//! - synthetic respondent generation (`sample`)

pub mod calibration_file;
pub mod income;
pub mod questions;
pub mod sample;

pub use calibration_file::*;
pub use income::*;
pub use questions::*;
pub use sample::*;
