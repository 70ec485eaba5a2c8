//! Black-box training of radial basis function networks.
//!
//! Models expose their parameters as one flat vector, their memory, through
//! [`training::Trainee`]. A search [`training::Algorithm`] proposes new memories, scored by the
//! mean distance between the model's outputs and a set of [`dataset::Sample`]s, and
//! [`training::complete`] keeps going until one of its [`training::Stopper`]s fires.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use rbfopt::{
//!     dataset, distance,
//!     rbf::{Bias, Network, Node, Unit},
//!     training::{self, Algorithm, RandomGreedy, StopAfterIterations, Trainee},
//! };
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let units: Vec<Box<dyn Unit>> = vec![
//!     Box::new(Node::uniform(&mut rng, 2, 1)),
//!     Box::new(Node::uniform(&mut rng, 2, 1)),
//!     Box::new(Bias::new(1)),
//! ];
//! let mut network = Network::new(units).unwrap();
//! let mut algorithm = RandomGreedy::new(network.memory(), rng);
//! let iterations = training::complete(
//!     &mut network,
//!     &dataset::xor(),
//!     &mut algorithm,
//!     distance::euclidean,
//!     &[&StopAfterIterations(100)],
//! )
//! .unwrap();
//! assert_eq!(iterations, 100);
//! network.set_memory(algorithm.best_memory().unwrap()).unwrap();
//! ```

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod dataset;
pub mod distance;
mod error;
pub mod rbf;
pub mod training;

pub use error::{Error, Result};
