pub mod engine;
pub mod report;

pub use engine::{evaluate, AlgorithmOutcome, BodyParsing, Evaluation, Evaluator};
pub use report::{render, OutputFormat};
