//! Worked packing scenarios with known optimal selections.
//!
//! The [`canonical`] set holds the classic worked examples (website test
//! cases and the single/multiple/no-item lines); [`edge_cases`] covers
//! boundary behavior such as exact fits and equal-cost tie-breaks. Every
//! scenario can rebuild its raw `capacity : item-list` input line for
//! parser-level tests, except where duplicate costs make the line
//! unparseable by design.

use packsmith_core::{Inventory, Item, Package};
use rust_decimal::Decimal;

/// A worked packing problem with its expected optimal selection.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Short name for assertion messages and log output.
    pub name: &'static str,
    /// The package capacity, as written in the source line.
    pub capacity: &'static str,
    /// Item tuples `(id, weight, cost)` in inventory order.
    pub items: &'static [(u32, &'static str, i64)],
    /// Ids of the optimal selection, in any order.
    pub expected_ids: &'static [u32],
    /// Total cost of the optimal selection.
    pub expected_cost: i64,
}

impl Scenario {
    /// Parses the capacity field.
    pub fn capacity(&self) -> Decimal {
        self.capacity.parse().expect("fixture capacity")
    }

    /// Builds the validated inventory.
    pub fn inventory(&self) -> Inventory {
        let items = self
            .items
            .iter()
            .map(|&(id, weight, cost)| {
                Item::new(id, weight.parse().expect("fixture weight"), cost).expect("fixture item")
            })
            .collect();
        Inventory::new(items).expect("fixture inventory")
    }

    /// Builds an empty package at the scenario capacity.
    pub fn package(&self) -> Package {
        Package::new(self.capacity()).expect("fixture package")
    }

    /// Rebuilds the raw `capacity : (id,weight,$cost) ...` input line.
    pub fn line(&self) -> String {
        let items: Vec<String> = self
            .items
            .iter()
            .map(|(id, weight, cost)| format!("({id},{weight},${cost})"))
            .collect();
        format!("{} : {}", self.capacity, items.join(" "))
    }

    /// True when two items share a cost but differ in weight, which the
    /// parser rejects as ambiguous.
    pub fn has_ambiguous_costs(&self) -> bool {
        self.items.iter().enumerate().any(|(index, a)| {
            self.items[..index]
                .iter()
                .any(|b| b.2 == a.2 && b.1 != a.1)
        })
    }
}

/// The canonical worked examples.
pub fn canonical() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "highest_cost_combo",
            capacity: "7",
            items: &[(1, "2", 1), (2, "3", 2), (3, "3", 5), (4, "4", 9)],
            expected_ids: &[3, 4],
            expected_cost: 14,
        },
        Scenario {
            name: "single_item",
            capacity: "81",
            items: &[
                (1, "53.38", 45),
                (2, "88.62", 98),
                (3, "78.48", 3),
                (4, "72.30", 76),
                (5, "30.18", 9),
                (6, "46.34", 48),
            ],
            expected_ids: &[4],
            expected_cost: 76,
        },
        Scenario {
            name: "multiple_items",
            capacity: "75",
            items: &[
                (1, "85.31", 29),
                (2, "14.55", 74),
                (3, "3.98", 16),
                (4, "26.24", 55),
                (5, "63.69", 52),
                (6, "76.25", 75),
                (7, "60.02", 74),
                (8, "93.18", 35),
                (9, "89.95", 78),
            ],
            expected_ids: &[2, 7],
            expected_cost: 148,
        },
        Scenario {
            name: "fractional_weights",
            capacity: "10",
            items: &[
                (1, "2", 40),
                (2, "3.14", 50),
                (3, "1.98", 100),
                (4, "5", 95),
                (5, "3", 30),
            ],
            expected_ids: &[1, 3, 4],
            expected_cost: 235,
        },
        Scenario {
            name: "item_too_heavy",
            capacity: "8",
            items: &[(1, "15.3", 34)],
            expected_ids: &[],
            expected_cost: 0,
        },
    ]
}

/// Boundary and tie-break cases from the original unit suite.
pub fn edge_cases() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "two_items_fit_exactly",
            capacity: "10",
            items: &[(1, "4", 10), (2, "6", 15)],
            expected_ids: &[1, 2],
            expected_cost: 25,
        },
        Scenario {
            name: "more_expensive_item_too_heavy",
            capacity: "5",
            items: &[(1, "6", 50), (2, "3", 20)],
            expected_ids: &[2],
            expected_cost: 20,
        },
        Scenario {
            name: "same_price_less_weight",
            capacity: "5",
            items: &[(1, "5", 30), (2, "4", 30)],
            expected_ids: &[2],
            expected_cost: 30,
        },
        Scenario {
            name: "most_expensive_combo",
            capacity: "9",
            items: &[(1, "4", 30), (2, "5", 35), (3, "9", 60)],
            expected_ids: &[1, 2],
            expected_cost: 65,
        },
        Scenario {
            name: "lower_cost_under_weight",
            capacity: "7",
            items: &[(1, "8", 60), (2, "7", 40)],
            expected_ids: &[2],
            expected_cost: 40,
        },
    ]
}

/// All scenarios, canonical first.
pub fn all() -> Vec<Scenario> {
    let mut scenarios = canonical();
    scenarios.extend(edge_cases());
    scenarios
}
