//! Data structures and methods for dealing with datasets.

/// A single sample within a dataset of mappings from vectors to vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// The input data.
    pub input: Vec<f64>,
    /// The output expected for the input.
    pub expected: Vec<f64>,
}

impl Sample {
    /// Create a sample mapping `input` to `expected`.
    pub fn new(input: Vec<f64>, expected: Vec<f64>) -> Self {
        Self { input, expected }
    }
}

/// The truth table of exclusive or, with `0.0` and `1.0` standing for false and true.
pub fn xor() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}
