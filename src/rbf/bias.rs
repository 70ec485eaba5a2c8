use crate::{rbf::Unit, training::Trainee, Result};

/// A unit with a constant output and nothing to train.
#[derive(Debug, Clone, PartialEq)]
pub struct Bias {
    outputs: Vec<f64>,
}

impl Bias {
    /// Create a bias with `count` outputs, all `1.0`.
    pub fn new(count: usize) -> Self {
        Self::with_outputs(vec![1.0; count])
    }

    /// Create a bias with the given outputs.
    pub fn with_outputs(outputs: Vec<f64>) -> Self {
        Self { outputs }
    }

    /// The constant outputs.
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }
}

impl Trainee for Bias {
    fn calculate(&self, _input: &[f64]) -> Result<Vec<f64>> {
        Ok(self.outputs.clone())
    }
}

impl Unit for Bias {
    fn output_count(&self) -> usize {
        self.outputs.len()
    }
}
