pub mod dataset;
pub mod generator;

pub use dataset::{Dataset, TransactionView};
pub use generator::{generate, GeneratorError, GeneratorSettings};
