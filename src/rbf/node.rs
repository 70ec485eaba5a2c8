use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    rbf::{function, Unit},
    training::Trainee,
    Error, Result,
};

/// A Gaussian radial basis unit.
///
/// The input is scaled element-wise by the input weights, then a Gaussian bell with standard
/// deviation `width` is measured between the scaled input and the centroid. The bell has no height
/// of its own: each output is the bell multiplied by one of the output weights.
///
/// The memory of a node is its input weights, its width, then its output weights. The centroid is
/// part of the node's structure and is never trained.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    input_weights: Vec<f64>,
    centroid: Vec<f64>,
    width: f64,
    output_weights: Vec<f64>,
}

impl Node {
    /// Create a node, failing if the centroid and the input weights differ in length.
    pub fn new(
        input_weights: Vec<f64>,
        centroid: Vec<f64>,
        width: f64,
        output_weights: Vec<f64>,
    ) -> Result<Self> {
        if centroid.len() != input_weights.len() {
            return Err(Error::DimensionMismatch {
                expected: input_weights.len(),
                actual: centroid.len(),
            });
        }
        Ok(Self {
            input_weights,
            centroid,
            width,
            output_weights,
        })
    }

    /// Create a node whose parameters, centroid included, are drawn from `distribution`.
    pub fn rand<R, D>(rng: &mut R, distribution: &D, input_count: usize, output_count: usize) -> Self
    where
        R: Rng,
        D: Distribution<f64>,
    {
        Self {
            input_weights: (0..input_count).map(|_| rng.sample(distribution)).collect(),
            centroid: (0..input_count).map(|_| rng.sample(distribution)).collect(),
            width: rng.sample(distribution),
            output_weights: (0..output_count).map(|_| rng.sample(distribution)).collect(),
        }
    }

    /// Create a node whose parameters are drawn uniformly from `[-100, 100]`.
    pub fn uniform<R>(rng: &mut R, input_count: usize, output_count: usize) -> Self
    where
        R: Rng,
    {
        Self::rand(
            rng,
            &Uniform::new_inclusive(-100.0, 100.0),
            input_count,
            output_count,
        )
    }

    /// Weights applied to each input before measuring the distance to the centroid.
    pub fn input_weights(&self) -> &[f64] {
        &self.input_weights
    }

    /// Center of the bell.
    pub fn centroid(&self) -> &[f64] {
        &self.centroid
    }

    /// Standard deviation of the bell, shared by every dimension.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Weights applied to the bell to produce each output.
    pub fn output_weights(&self) -> &[f64] {
        &self.output_weights
    }
}

impl Trainee for Node {
    fn calculate(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_weights.len() {
            return Err(Error::DimensionMismatch {
                expected: self.input_weights.len(),
                actual: input.len(),
            });
        }
        let scaled: Vec<f64> = input
            .iter()
            .zip(&self.input_weights)
            .map(|(x, w)| x * w)
            .collect();
        let activation = function::bell(
            function::squared_distance(&self.centroid, &scaled),
            self.width,
        );
        Ok(self
            .output_weights
            .iter()
            .map(|w| activation * w)
            .collect())
    }

    fn memory_size(&self) -> usize {
        self.input_weights.len() + 1 + self.output_weights.len()
    }

    fn memory(&self) -> Vec<f64> {
        let mut memory = Vec::with_capacity(self.memory_size());
        memory.extend_from_slice(&self.input_weights);
        memory.push(self.width);
        memory.extend_from_slice(&self.output_weights);
        memory
    }

    fn set_memory(&mut self, memory: &[f64]) -> Result<()> {
        if memory.len() != self.memory_size() {
            return Err(Error::MemoryLengthMismatch {
                expected: self.memory_size(),
                actual: memory.len(),
            });
        }
        let (input_weights, rest) = memory.split_at(self.input_weights.len());
        let (width, output_weights) = rest.split_at(1);
        self.input_weights.copy_from_slice(input_weights);
        self.width = width[0];
        self.output_weights.copy_from_slice(output_weights);
        Ok(())
    }
}

impl Unit for Node {
    fn output_count(&self) -> usize {
        self.output_weights.len()
    }
}
