//! Packsmith Solver Engine
//!
//! This crate provides the packing implementations:
//! - [`RecursivePacker`] - exhaustive include/exclude recursion
//! - [`BranchAndBoundPacker`] - best-first search with relaxation-bound
//!   pruning
//! - [`Packer`] - the strategy trait both implement
//! - Configuration wiring ([`PackerConfig`], TOML/YAML)
//!
//! Both packers produce the same optimal cost; when several selections
//! tie on cost, the recursive packer is guaranteed to pick the lightest.

pub mod branch_bound;
pub mod config;
pub mod packer;
pub mod recursive;


pub use branch_bound::BranchAndBoundPacker;
pub use config::{ConfigError, PackerConfig, PackerKind};
pub use packer::Packer;
pub use recursive::RecursivePacker;
