pub mod checkdigit;
pub mod evaluator;
pub mod config;
pub mod error;
pub mod utils;

pub use crate::checkdigit::{Algorithm, CheckDigit, ALGORITHMS};
pub use crate::error::{Result, CheckDigitError};
pub use crate::config::Config;
pub use crate::evaluator::{evaluate, Evaluation, Evaluator};
