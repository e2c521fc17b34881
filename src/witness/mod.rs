//! Partition problem instances and their blinded prefix-sum witnesses
//!
//! An instance is a list of weights `l`; an assignment `m ∈ {-1,1}^n` satisfies
//! it when `Σ m_i · l_i = 0`. The witness is the running dot product, randomly
//! sign-flipped and shifted so that only adjacent differences carry meaning.

mod builder;
mod problem;

pub use builder::{build_witness, Witness};
pub use problem::Problem;
