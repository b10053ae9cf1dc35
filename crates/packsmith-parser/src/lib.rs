//! Text-format reader for packing problems.
//!
//! Parses lines shaped as:
//!
//! ```text
//! 81 : (1,53.38,$45) (2,88.62,$98) (3,78.48,$3)
//! ```
//!
//! The maximum weight the package can hold comes before the colon; each
//! item is a parenthesized `id,weight,$cost` triple. [`render_ids`]
//! covers the reporting side: the chosen ids comma-joined, or `-` when
//! nothing was chosen.
//!
//! **Limitation:** multiple items with the same cost but different
//! weights may lead to different implementation-specific selections, so
//! such input is rejected as an unsupported ambiguity.

use std::collections::HashMap;
use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use packsmith_core::{Inventory, Item, Package};

#[cfg(test)]
mod tests;

static CAPACITY_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*:\s*").expect("hard-coded pattern"));
static ITEM_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("hard-coded pattern"));
static ITEM_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[()$]").expect("hard-coded pattern"));
static COMPONENT_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("hard-coded pattern"));

/// Parse error
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line does not split into a capacity and an item list
    #[error("input must be `<capacity> : <item list>`")]
    Format,

    /// The capacity field is not a decimal number
    #[error("invalid capacity {text:?}")]
    Capacity {
        text: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// An item entry does not have exactly three components
    #[error("item entry {0:?} must be `(id,weight,$cost)`")]
    ItemFormat(String),

    /// The id component is not an integer
    #[error("invalid id in item entry {entry:?}")]
    Id {
        entry: String,
        #[source]
        source: ParseIntError,
    },

    /// The weight component is not a decimal number
    #[error("invalid weight in item entry {entry:?}")]
    Weight {
        entry: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// The cost component is not an integer
    #[error("invalid cost in item entry {entry:?}")]
    Cost {
        entry: String,
        #[source]
        source: ParseIntError,
    },

    /// Two items share a cost but differ in weight
    #[error("multiple items cost ${cost} but have different weights, which is an unsupported ambiguity")]
    AmbiguousCost { cost: i64 },

    /// The parsed values fail model validation
    #[error(transparent)]
    Model(#[from] packsmith_core::Error),
}

/// The capacity and item list read from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingList {
    /// The maximum weight the package can hold.
    pub capacity: Decimal,
    /// The items to pick from, in input order.
    pub items: Vec<Item>,
}

impl PackingList {
    /// Builds a validated inventory from the parsed items.
    pub fn inventory(&self) -> packsmith_core::Result<Inventory> {
        Inventory::new(self.items.clone())
    }

    /// Builds an empty package at the parsed capacity.
    pub fn package(&self) -> packsmith_core::Result<Package> {
        Package::new(self.capacity)
    }
}

/// Parses one `capacity : item-list` line.
///
/// # Errors
///
/// See [`ParseError`]; malformed text never reaches the packers.
pub fn parse(input: &str) -> Result<PackingList, ParseError> {
    let fields: Vec<&str> = CAPACITY_SPLIT.split(input.trim()).collect();
    let &[capacity_text, item_text] = fields.as_slice() else {
        return Err(ParseError::Format);
    };
    let capacity = capacity_text
        .parse::<Decimal>()
        .map_err(|source| ParseError::Capacity {
            text: capacity_text.to_string(),
            source,
        })?;
    parse_items(capacity, item_text)
}

fn parse_items(capacity: Decimal, item_text: &str) -> Result<PackingList, ParseError> {
    let mut items = Vec::new();
    let mut weight_by_cost: HashMap<i64, Decimal> = HashMap::new();
    for entry in ITEM_SPLIT.split(item_text) {
        let stripped = ITEM_STRIP.replace_all(entry, "");
        let components: Vec<&str> = COMPONENT_SPLIT.split(&stripped).collect();
        let &[id_text, weight_text, cost_text] = components.as_slice() else {
            return Err(ParseError::ItemFormat(entry.to_string()));
        };
        let id = id_text.parse::<u32>().map_err(|source| ParseError::Id {
            entry: entry.to_string(),
            source,
        })?;
        let weight = weight_text
            .parse::<Decimal>()
            .map_err(|source| ParseError::Weight {
                entry: entry.to_string(),
                source,
            })?;
        let cost = cost_text.parse::<i64>().map_err(|source| ParseError::Cost {
            entry: entry.to_string(),
            source,
        })?;
        if let Some(seen) = weight_by_cost.insert(cost, weight) {
            if seen != weight {
                return Err(ParseError::AmbiguousCost { cost });
            }
        }
        items.push(Item::new(id, weight, cost)?);
    }
    Ok(PackingList { capacity, items })
}

/// Renders the chosen item ids comma-joined, or `-` for an empty package.
pub fn render_ids(package: &Package) -> String {
    if package.is_empty() {
        return "-".to_string();
    }
    package
        .ids()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
