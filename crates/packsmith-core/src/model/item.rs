//! Immutable knapsack item.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};

/// Maximum cost (in USD) of any single item.
pub const MAX_ITEM_COST: i64 = 100;

/// Decimal digits kept when deriving a cost/weight ratio.
const RATIO_SCALE: u32 = 9;

/// A purchasable unit with a fixed id, weight and cost.
///
/// Items are selected as a whole or not at all; there are no fractional
/// or repeated selections. Construction validates the weight and cost,
/// so a held `Item` is always well-formed.
///
/// # Examples
///
/// ```
/// use packsmith_core::Item;
///
/// let item = Item::new(3, "3".parse().unwrap(), 5).unwrap();
/// assert_eq!(item.cost_weight_ratio(), "1.666666667".parse().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    id: u32,
    weight: Decimal,
    cost: i64,
}

impl Item {
    /// Creates a new item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] for a zero or negative weight and
    /// [`Error::InvalidCost`] when the cost is negative or above
    /// [`MAX_ITEM_COST`].
    pub fn new(id: u32, weight: Decimal, cost: i64) -> Result<Self> {
        if weight <= Decimal::ZERO {
            return Err(Error::InvalidWeight { id, weight });
        }
        if !(0..=MAX_ITEM_COST).contains(&cost) {
            return Err(Error::InvalidCost {
                id,
                cost,
                ceiling: MAX_ITEM_COST,
            });
        }
        Ok(Item { id, weight, cost })
    }

    /// Returns the unique identifier.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the weight (in pounds).
    #[inline]
    pub fn weight(&self) -> Decimal {
        self.weight
    }

    /// Returns the cost (in USD).
    #[inline]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Cost per unit of weight, 9 digits of scale, rounded half up.
    ///
    /// A zero weight yields a zero ratio; construction forbids zero
    /// weights, so this only guards relaxed callers.
    pub fn cost_weight_ratio(&self) -> Decimal {
        if self.weight.is_zero() {
            return Decimal::ZERO;
        }
        (Decimal::from(self.cost) / self.weight)
            .round_dp_with_strategy(RATIO_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {} ({} lbs, ${})", self.id, self.weight, self.cost)
    }
}
