//! Packer contract and the shared search-to-package commit step.

use packsmith_core::{Error, Item, Package, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Selects zero or more inventory items and packs them into a target
/// package, maximizing total cost within the weight capacity.
///
/// Implementations run a pure, synchronous search and write the result
/// back in a single commit; a package can only ever be packed once.
pub trait Packer: Send + Sync {
    /// Packs the optimal selection into `package`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyPacked`] when the package already holds
    /// items, and [`Error::Internal`] if the package rejects an item the
    /// search considered feasible.
    fn pack(&self, package: &mut Package) -> Result<()>;
}

/// A weight-feasible subset of inventory with its accumulated totals.
#[derive(Debug, Clone, Default)]
pub(crate) struct Selection {
    pub items: Vec<Item>,
    pub cost: i64,
    pub weight: Decimal,
}

impl Selection {
    /// Returns this selection extended by one item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.cost += item.cost();
        self.weight += item.weight();
        self.items.push(item);
        self
    }

    /// Branch preference: strictly higher cost wins; at equal cost the
    /// lighter (or equally heavy) selection wins.
    pub fn beats(&self, other: &Selection) -> bool {
        self.cost > other.cost || (self.cost == other.cost && self.weight <= other.weight)
    }
}

/// Writes a computed selection into the target package.
///
/// The search only produces weight-feasible selections, so a rejected
/// add means the search and the package disagree on capacity arithmetic;
/// that is a defect signal, surfaced as [`Error::Internal`].
pub(crate) fn commit(package: &mut Package, items: Vec<Item>) -> Result<()> {
    for item in items {
        debug!(%item, "packing");
        package
            .add(item)
            .map_err(|err| Error::Internal(format!("package rejected a chosen item: {err}")))?;
    }
    Ok(())
}
