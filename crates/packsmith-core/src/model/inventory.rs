//! Bounded item inventory.

use crate::error::{Error, Result};
use crate::model::Item;

/// Maximum number of items a packer will consider.
///
/// The solvers explore the full decision tree in the worst case, so the
/// bound keeps 2^n small (32768 leaves at most).
pub const MAX_ITEMS: usize = 15;

/// The ordered set of items available for packing.
///
/// Captured once at construction and immutable thereafter; packers work
/// against borrowed slices or their own sorted copies, never against a
/// shared mutable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an inventory from the given items.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInventory`] for an empty list and
    /// [`Error::TooManyItems`] past [`MAX_ITEMS`].
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyInventory);
        }
        if items.len() > MAX_ITEMS {
            return Err(Error::TooManyItems {
                count: items.len(),
                limit: MAX_ITEMS,
            });
        }
        Ok(Inventory { items })
    }

    /// Returns the items in their original order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: construction requires at least one item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
