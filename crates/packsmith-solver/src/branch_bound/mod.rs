//! Branch-and-bound whole-item packer.
//!
//! Explores the same take/leave decision tree as the recursive packer,
//! but considers items in cost/weight-ratio order and keeps a frontier
//! of partial selections in a priority queue keyed on an optimistic
//! bound. Any subtree whose bound cannot beat the best complete
//! selection found so far is discarded without expansion. At best only
//! one path through the tree is fully explored; at worst the whole tree
//! still gets walked.

mod node;

use std::collections::BinaryHeap;

use packsmith_core::{Error, Inventory, Item, Package, Result};
use tracing::{debug, info, trace};

use crate::packer::{commit, Packer};

pub use node::Node;

/// Packs items with best-first branch and bound.
///
/// Produces the same optimal cost as [`RecursivePacker`], usually while
/// visiting far fewer nodes.
///
/// [`RecursivePacker`]: crate::RecursivePacker
#[derive(Debug, Clone)]
pub struct BranchAndBoundPacker {
    inventory: Inventory,
}

impl BranchAndBoundPacker {
    /// Creates a packer over the given inventory.
    pub fn new(inventory: Inventory) -> Self {
        BranchAndBoundPacker { inventory }
    }

    /// Returns the inventory this packer selects from.
    #[inline]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

impl Packer for BranchAndBoundPacker {
    fn pack(&self, package: &mut Package) -> Result<()> {
        if !package.is_empty() {
            return Err(Error::AlreadyPacked);
        }
        let capacity = package.capacity();

        // The greedy relaxation bound is tightest when items arrive in
        // "bang for the buck" order, so the search runs over a private
        // ratio-descending copy; the caller's inventory keeps its order.
        let mut items: Vec<Item> = self.inventory.items().to_vec();
        items.sort_by(|a, b| b.cost_weight_ratio().cmp(&a.cost_weight_ratio()));

        let mut best = Node::root();
        let mut queue = BinaryHeap::new();
        queue.push(Node::root().compute_bound(capacity, &items));

        while let Some(node) = queue.pop() {
            trace!(
                head = node.head(),
                bound = node.bound(),
                best_cost = best.cost(),
                "pulled from queue",
            );
            // The whole subtree is provably no better than the incumbent.
            if node.bound() <= best.cost() {
                continue;
            }
            let Some(item) = items.get(node.head()) else {
                continue;
            };

            // Take the item.
            let took = node.advance().with_weight(item.weight());
            if took.weight() <= capacity {
                let took = took
                    .with_item(item.clone())
                    .with_cost(item.cost())
                    .compute_bound(capacity, &items);
                if took.cost() > best.cost() {
                    debug!(cost = took.cost(), weight = %took.weight(), "new best selection");
                    best = took.clone();
                }
                if took.bound() > best.cost() {
                    queue.push(took);
                }
            }

            // Leave the item.
            let left = node.advance().compute_bound(capacity, &items);
            if left.bound() > best.cost() {
                queue.push(left);
            }
        }

        info!(
            event = "pack_end",
            packer = "branch_and_bound",
            cost = best.cost(),
            weight = %best.weight(),
            count = best.taken().len(),
        );
        commit(package, best.into_taken())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    fn item(id: u32, weight: &str, cost: i64) -> Item {
        Item::new(id, dec(weight), cost).unwrap()
    }

    fn pack(capacity: &str, items: Vec<Item>) -> Package {
        let mut package = Package::new(dec(capacity)).unwrap();
        BranchAndBoundPacker::new(Inventory::new(items).unwrap())
            .pack(&mut package)
            .unwrap();
        package
    }

    #[test]
    fn test_prunes_to_the_optimal_pair() {
        let package = pack(
            "7",
            vec![
                item(1, "2", 1),
                item(2, "3", 2),
                item(3, "3", 5),
                item(4, "4", 9),
            ],
        );
        let mut ids = package.ids();
        ids.sort_unstable();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(package.total_cost(), 14);
        assert_eq!(package.total_weight(), dec("7"));
    }

    #[test]
    fn test_single_item_over_capacity_yields_empty() {
        let package = pack("8", vec![item(1, "15.3", 34)]);
        assert!(package.is_empty());
        assert_eq!(package.total_cost(), 0);
    }

    #[test]
    fn test_exact_capacity_is_includable() {
        let package = pack("7", vec![item(1, "7", 40)]);
        assert_eq!(package.ids(), vec![1]);
    }

    #[test]
    fn test_does_not_reorder_the_inventory() {
        let inventory = Inventory::new(vec![item(1, "2", 1), item(4, "4", 9)]).unwrap();
        let packer = BranchAndBoundPacker::new(inventory);
        let mut package = Package::new(dec("7")).unwrap();
        packer.pack(&mut package).unwrap();
        let ids: Vec<u32> = packer.inventory().items().iter().map(Item::id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_pack_requires_empty_package() {
        let inventory = Inventory::new(vec![item(1, "2", 1)]).unwrap();
        let packer = BranchAndBoundPacker::new(inventory);
        let mut package = Package::new(dec("10")).unwrap();
        packer.pack(&mut package).unwrap();
        assert_eq!(packer.pack(&mut package).unwrap_err(), Error::AlreadyPacked);
    }
}
