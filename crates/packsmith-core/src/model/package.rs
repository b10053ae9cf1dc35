//! Capacity-limited package accumulator.

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::model::Item;

/// Maximum weight (in pounds) any package can hold.
pub const MAX_CAPACITY: Decimal = Decimal::ONE_HUNDRED;

/// A package holding zero or more chosen items.
///
/// Created empty with a fixed capacity, populated exactly once by a
/// single packer invocation, and read-only afterward. The package
/// re-checks capacity and duplicate ids on every [`add`](Self::add), so
/// an optimizer whose arithmetic disagrees with the package fails loudly
/// instead of overfilling it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    capacity: Decimal,
    items: Vec<Item>,
}

impl Package {
    /// Creates an empty package with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCapacity`] or [`Error::CapacityCeiling`]
    /// when the capacity is out of range.
    pub fn new(capacity: Decimal) -> Result<Self> {
        if capacity < Decimal::ZERO {
            return Err(Error::NegativeCapacity { capacity });
        }
        if capacity > MAX_CAPACITY {
            return Err(Error::CapacityCeiling {
                capacity,
                ceiling: MAX_CAPACITY,
            });
        }
        Ok(Package {
            capacity,
            items: Vec::new(),
        })
    }

    /// Returns the maximum weight this package can hold.
    #[inline]
    pub fn capacity(&self) -> Decimal {
        self.capacity
    }

    /// Adds an item to the package.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateItem`] when an item with the same id is
    /// already held, and [`Error::InsufficientCapacity`] when the item
    /// would push the total weight past the capacity. The boundary is
    /// inclusive: an item that lands exactly on the capacity fits.
    pub fn add(&mut self, item: Item) -> Result<()> {
        if self.items.iter().any(|held| held.id() == item.id()) {
            return Err(Error::DuplicateItem { id: item.id() });
        }
        let held = self.total_weight();
        if held + item.weight() > self.capacity {
            return Err(Error::InsufficientCapacity {
                id: item.id(),
                weight: item.weight(),
                held,
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Returns the held items in insertion order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the ids of all held items.
    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(Item::id).collect()
    }

    /// Total cost (in USD) of all held items.
    pub fn total_cost(&self) -> i64 {
        self.items.iter().map(Item::cost).sum()
    }

    /// Total weight (in pounds) of all held items.
    pub fn total_weight(&self) -> Decimal {
        self.items.iter().map(Item::weight).sum()
    }

    /// Returns true when no items have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all held items, making the package packable again.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
