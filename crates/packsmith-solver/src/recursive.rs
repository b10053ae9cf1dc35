//! Whole-item recursive packer.
//!
//! Breaks the packing down into smaller subproblems by direct recursion:
//! every call either includes the current item or excludes it. There is
//! no memoization, so overlapping subproblems are re-solved and the time
//! complexity is O(2^n) - acceptable under the 15-item inventory bound,
//! and documented here as a performance caveat rather than a bug.

use packsmith_core::{Error, Inventory, Item, Package, Result};
use rust_decimal::Decimal;
use tracing::info;

use crate::packer::{commit, Packer, Selection};

/// Packs items by exhaustively exploring the include/exclude decision
/// tree and comparing branch outcomes directly.
///
/// The branch with the strictly higher total cost wins; when both
/// branches reach the same cost, the lighter one wins.
///
/// # Examples
///
/// ```
/// use packsmith_core::{Inventory, Item, Package};
/// use packsmith_solver::{Packer, RecursivePacker};
///
/// let inventory = Inventory::new(vec![
///     Item::new(1, "2".parse().unwrap(), 1).unwrap(),
///     Item::new(2, "3".parse().unwrap(), 5).unwrap(),
/// ]).unwrap();
/// let mut package = Package::new("3".parse().unwrap()).unwrap();
///
/// RecursivePacker::new(inventory).pack(&mut package).unwrap();
/// assert_eq!(package.ids(), vec![2]);
/// ```
#[derive(Debug, Clone)]
pub struct RecursivePacker {
    inventory: Inventory,
}

impl RecursivePacker {
    /// Creates a packer over the given inventory.
    pub fn new(inventory: Inventory) -> Self {
        RecursivePacker { inventory }
    }

    /// Returns the inventory this packer selects from.
    #[inline]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

impl Packer for RecursivePacker {
    fn pack(&self, package: &mut Package) -> Result<()> {
        if !package.is_empty() {
            return Err(Error::AlreadyPacked);
        }
        let items = self.inventory.items();
        let chosen = solve(items, package.capacity(), items.len());
        info!(
            event = "pack_end",
            packer = "recursive",
            cost = chosen.cost,
            weight = %chosen.weight,
            count = chosen.items.len(),
        );
        commit(package, chosen.items)
    }
}

/// Optimal selection over the first `nbr_items` of `items` at the given
/// remaining capacity, recursing from the last item down.
fn solve(items: &[Item], capacity: Decimal, nbr_items: usize) -> Selection {
    // Base case: out of items or out of room.
    if nbr_items == 0 || capacity <= Decimal::ZERO {
        return Selection::default();
    }

    // Item is too heavy: it can never be chosen at this capacity.
    let current = &items[nbr_items - 1];
    if current.weight() > capacity {
        return solve(items, capacity, nbr_items - 1);
    }

    let include =
        solve(items, capacity - current.weight(), nbr_items - 1).with_item(current.clone());
    let exclude = solve(items, capacity, nbr_items - 1);

    // Highest cost wins; if cost is the same, the lighter branch wins.
    if include.beats(&exclude) {
        include
    } else {
        exclude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    fn item(id: u32, weight: &str, cost: i64) -> Item {
        Item::new(id, dec(weight), cost).unwrap()
    }

    #[test]
    fn test_solve_empty_at_zero_capacity() {
        let items = vec![item(1, "1", 10)];
        let selection = solve(&items, Decimal::ZERO, items.len());
        assert!(selection.items.is_empty());
        assert_eq!(selection.cost, 0);
    }

    #[test]
    fn test_solve_skips_too_heavy_item() {
        let items = vec![item(1, "15.3", 34)];
        let selection = solve(&items, dec("8"), items.len());
        assert!(selection.items.is_empty());
    }

    #[test]
    fn test_solve_prefers_lighter_branch_on_cost_tie() {
        // Both items cost the same; only one fits at a time.
        let items = vec![item(1, "5", 30), item(2, "4", 30)];
        let selection = solve(&items, dec("5"), items.len());
        let ids: Vec<u32> = selection.items.iter().map(Item::id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(selection.weight, dec("4"));
    }

    #[test]
    fn test_pack_requires_empty_package() {
        let inventory = Inventory::new(vec![item(1, "2", 1)]).unwrap();
        let packer = RecursivePacker::new(inventory);

        let mut package = Package::new(dec("10")).unwrap();
        packer.pack(&mut package).unwrap();
        assert_eq!(package.ids(), vec![1]);

        assert_eq!(package.total_cost(), 1);
        assert_eq!(packer.pack(&mut package).unwrap_err(), Error::AlreadyPacked);
        // The failed second pack left the package untouched.
        assert_eq!(package.ids(), vec![1]);
    }

    #[test]
    fn test_pack_again_after_clear() {
        let inventory = Inventory::new(vec![item(1, "2", 1)]).unwrap();
        let packer = RecursivePacker::new(inventory);

        let mut package = Package::new(dec("10")).unwrap();
        packer.pack(&mut package).unwrap();
        package.clear();
        packer.pack(&mut package).unwrap();
        assert_eq!(package.ids(), vec![1]);
    }
}
