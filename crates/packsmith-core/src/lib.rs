//! Packsmith Core - Model types for 0/1 knapsack packing
//!
//! This crate provides the fundamental value types shared by the packsmith
//! crates:
//! - [`Item`] - an immutable unit with an id, a decimal weight and a cost
//! - [`Inventory`] - the fixed, bounded set of items available to pack
//! - [`Package`] - the capacity-limited accumulator a packer fills
//!
//! Validation limits (item cost ceiling, package capacity ceiling,
//! inventory size) live next to the types they guard.

pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{Inventory, Item, Package};
