//! Radial basis function networks.
//!
//! A [`Network`] sums the outputs of its units. Units are anything implementing [`Unit`]: the
//! trainable Gaussian [`Node`] and the constant [`Bias`] are provided. The memory of a network is
//! the memory of its units laid end to end, so the whole network can be handed to
//! [`complete`](crate::training::complete).

use std::fmt;

use crate::training::Trainee;

mod bias;
pub mod function;
mod network;
mod node;

pub use bias::Bias;
pub use network::Network;
pub use node::Node;

/// A building block of a [`Network`].
///
/// Units without trainable parameters keep the empty memory provided by [`Trainee`].
pub trait Unit: Trainee + fmt::Debug + Send {
    /// Number of values returned by [`Trainee::calculate`].
    fn output_count(&self) -> usize;
}
