//! Naive square matrix multiplication with hexadecimal output.

pub mod error;
pub mod fixtures;
pub mod hex;
pub mod matrix;
pub mod multiply;

pub use error::{Error, Operand, Result, ShapeError};
pub use hex::{format_hex, write_hex};
pub use matrix::Matrix;
pub use multiply::{multiply, verify, Mismatch};
