//! Error types for packsmith

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for packsmith operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Item cost is outside the supported range
    #[error("item {id}: cost {cost} is outside 0..={ceiling}")]
    InvalidCost { id: u32, cost: i64, ceiling: i64 },

    /// Item weight is zero or negative
    #[error("item {id}: weight {weight} must be positive")]
    InvalidWeight { id: u32, weight: Decimal },

    /// Package capacity is negative
    #[error("capacity {capacity} must not be negative")]
    NegativeCapacity { capacity: Decimal },

    /// Package capacity exceeds the supported maximum
    #[error("capacity {capacity} exceeds the {ceiling} ceiling")]
    CapacityCeiling { capacity: Decimal, ceiling: Decimal },

    /// Inventory must hold at least one item
    #[error("at least one inventory item is required")]
    EmptyInventory,

    /// Inventory holds more items than the packers support
    #[error("inventory holds {count} items, limit is {limit}")]
    TooManyItems { count: usize, limit: usize },

    /// An item with the same id is already held by the package
    #[error("item {id} is already packed")]
    DuplicateItem { id: u32 },

    /// Adding the item would push the package past its capacity
    #[error("item {id} does not fit: {weight} + {held} held exceeds capacity {capacity}")]
    InsufficientCapacity {
        id: u32,
        weight: Decimal,
        held: Decimal,
        capacity: Decimal,
    },

    /// Packing into a package that already holds items
    #[error("package has already been packed")]
    AlreadyPacked,

    /// Internal error (should not occur in normal operation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for packsmith operations
pub type Result<T> = std::result::Result<T, Error>;
