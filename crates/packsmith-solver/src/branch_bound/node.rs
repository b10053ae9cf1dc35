//! Decision-tree node for the branch-and-bound packer.
//!
//! Each node captures a partial selection: the next item to branch on,
//! the items taken so far, their accumulated weight and cost, and an
//! upper bound on the cost any completion of this selection can reach.

use std::cmp::Ordering;

use packsmith_core::Item;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// An immutable node in the take/leave decision tree.
///
/// Every derivation ([`advance`](Self::advance), [`with_weight`](Self::with_weight),
/// [`with_cost`](Self::with_cost), [`with_item`](Self::with_item),
/// [`compute_bound`](Self::compute_bound)) returns a new node, so queue
/// entries that share an ancestor never alias each other's state.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Index of the next item to branch on.
    head: usize,
    /// Items taken along the path to this node.
    taken: Vec<Item>,
    /// Accumulated weight of the taken items.
    weight: Decimal,
    /// Accumulated cost of the taken items.
    cost: i64,
    /// Upper bound on the cost achievable from this node.
    bound: i64,
}

impl Node {
    /// Creates the empty root node.
    pub fn root() -> Self {
        Node::default()
    }

    /// Child node positioned on the next item, inheriting this node's
    /// selection.
    pub fn advance(&self) -> Self {
        Node {
            head: self.head + 1,
            taken: self.taken.clone(),
            weight: self.weight,
            cost: self.cost,
            bound: self.bound,
        }
    }

    /// Returns this node with additional weight.
    pub fn with_weight(self, additional: Decimal) -> Self {
        Node {
            weight: self.weight + additional,
            ..self
        }
    }

    /// Returns this node with additional cost.
    pub fn with_cost(self, additional: i64) -> Self {
        Node {
            cost: self.cost + additional,
            ..self
        }
    }

    /// Returns this node with the item appended to its selection.
    pub fn with_item(mut self, item: Item) -> Self {
        self.taken.push(item);
        self
    }

    /// Returns this node with its upper bound recomputed.
    ///
    /// Starting from the accumulated weight and cost, whole items are
    /// added greedily in the (ratio-descending) inventory order while
    /// they fit; the remaining capacity is then filled with the
    /// fractional value of the first item that does not fit, rounded
    /// half up. When every remaining item fits there is nothing left to
    /// relax and the bound is exact.
    pub fn compute_bound(self, capacity: Decimal, items: &[Item]) -> Self {
        let mut head = self.head;
        let mut total_weight = self.weight;
        let mut bound = self.cost;
        while let Some(item) = items.get(head) {
            if total_weight + item.weight() > capacity {
                break;
            }
            total_weight += item.weight();
            bound += item.cost();
            head += 1;
        }
        if let Some(next) = items.get(head) {
            let slack = capacity - total_weight;
            // Costs stay tiny here; saturating keeps the value an upper bound.
            bound += (slack * next.cost_weight_ratio())
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap_or(i64::MAX);
        }
        Node { bound, ..self }
    }

    /// Index of the next item to branch on.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Accumulated weight of the taken items.
    #[inline]
    pub fn weight(&self) -> Decimal {
        self.weight
    }

    /// Accumulated cost of the taken items.
    #[inline]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Upper bound on the cost achievable from this node.
    #[inline]
    pub fn bound(&self) -> i64 {
        self.bound
    }

    /// Items taken along the path to this node.
    #[inline]
    pub fn taken(&self) -> &[Item] {
        &self.taken
    }

    /// Consumes the node, yielding its taken items.
    pub fn into_taken(self) -> Vec<Item> {
        self.taken
    }
}

/// Nodes order by bound so a max-heap pops the most promising partial
/// selection first.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound.cmp(&other.bound)
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound
    }
}

impl Eq for Node {}
