//! Tests for the packing-list reader, including the end-to-end
//! parse -> pack -> render pipeline over the shared scenarios.

use packsmith_core::Error;
use packsmith_solver::{Packer, PackerConfig, PackerKind};
use packsmith_test::{init_tracing, scenarios};
use rust_decimal::Decimal;

use super::*;

fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn test_parses_capacity_and_items() {
    let list = parse("81 : (1,53.38,$45) (2,88.62,$98) (3,78.48,$3)").unwrap();
    assert_eq!(list.capacity, dec("81"));
    assert_eq!(list.items.len(), 3);
    let first = &list.items[0];
    assert_eq!(first.id(), 1);
    assert_eq!(first.weight(), dec("53.38"));
    assert_eq!(first.cost(), 45);
}

#[test]
fn test_tolerates_surrounding_whitespace() {
    let list = parse("  7 :  (1,2,$1)   (2,3,$2) ").unwrap();
    assert_eq!(list.capacity, dec("7"));
    assert_eq!(list.items.len(), 2);
}

#[test]
fn test_missing_colon_is_a_format_error() {
    assert!(matches!(parse("7 (1,2,$1)"), Err(ParseError::Format)));
}

#[test]
fn test_extra_colon_is_a_format_error() {
    assert!(matches!(parse("7 : 8 : (1,2,$1)"), Err(ParseError::Format)));
}

#[test]
fn test_bad_capacity() {
    assert!(matches!(
        parse("heavy : (1,2,$1)"),
        Err(ParseError::Capacity { .. })
    ));
}

#[test]
fn test_wrong_component_count() {
    assert!(matches!(
        parse("7 : (1,2)"),
        Err(ParseError::ItemFormat(_))
    ));
}

#[test]
fn test_bad_item_numbers() {
    assert!(matches!(parse("7 : (x,2,$1)"), Err(ParseError::Id { .. })));
    assert!(matches!(
        parse("7 : (1,heavy,$1)"),
        Err(ParseError::Weight { .. })
    ));
    assert!(matches!(
        parse("7 : (1,2,$cheap)"),
        Err(ParseError::Cost { .. })
    ));
}

#[test]
fn test_rejects_same_cost_different_weight() {
    let line = "56 : (1,90.72,$13) (2,33.80,$40) (3,43.15,$10) (4,37.97,$16) (5,46.81,$36) \
                (6,48.77,$79) (7,81.80,$45) (8,19.36,$79) (9,6.76,$64)";
    let err = parse(line).unwrap_err();
    assert!(matches!(err, ParseError::AmbiguousCost { cost: 79 }));
}

#[test]
fn test_accepts_same_cost_same_weight() {
    let list = parse("7 : (1,2,$5) (2,2,$5)").unwrap();
    assert_eq!(list.items.len(), 2);
}

#[test]
fn test_model_validation_propagates() {
    assert!(matches!(
        parse("7 : (1,0,$5)"),
        Err(ParseError::Model(Error::InvalidWeight { .. }))
    ));
    assert!(matches!(
        parse("7 : (1,2,$101)"),
        Err(ParseError::Model(Error::InvalidCost { .. }))
    ));
}

#[test]
fn test_scenario_lines_round_trip() {
    for scenario in scenarios::canonical() {
        if scenario.has_ambiguous_costs() {
            continue;
        }
        let list = parse(&scenario.line()).unwrap();
        assert_eq!(list.capacity, scenario.capacity(), "{}", scenario.name);
        assert_eq!(
            list.items,
            scenario.inventory().items(),
            "{}",
            scenario.name
        );
    }
}

#[test]
fn test_ambiguous_scenario_line_is_rejected() {
    // items 2 and 7 both cost $74 at different weights
    let scenario = scenarios::canonical()
        .into_iter()
        .find(|scenario| scenario.name == "multiple_items")
        .unwrap();
    assert!(matches!(
        parse(&scenario.line()),
        Err(ParseError::AmbiguousCost { cost: 74 })
    ));
}

#[test]
fn test_render_ids() {
    let list = parse("10 : (1,4,$10) (2,6,$15)").unwrap();
    let mut package = list.package().unwrap();
    for item in &list.items {
        package.add(item.clone()).unwrap();
    }
    assert_eq!(render_ids(&package), "1,2");
}

#[test]
fn test_render_ids_empty_sentinel() {
    let list = parse("8 : (1,15.3,$34)").unwrap();
    let package = list.package().unwrap();
    assert_eq!(render_ids(&package), "-");
}

#[test]
fn test_parse_pack_render_pipeline() {
    init_tracing();
    for scenario in scenarios::canonical() {
        if scenario.has_ambiguous_costs() {
            continue;
        }
        let list = parse(&scenario.line()).unwrap();
        for kind in [PackerKind::Recursive, PackerKind::BranchAndBound] {
            let packer = PackerConfig::new()
                .with_packer(kind)
                .build(list.inventory().unwrap());
            let mut package = list.package().unwrap();
            packer.pack(&mut package).unwrap();

            let mut ids = package.ids();
            ids.sort_unstable();
            let mut expected = scenario.expected_ids.to_vec();
            expected.sort_unstable();
            assert_eq!(ids, expected, "{kind} on {}", scenario.name);

            let rendered = render_ids(&package);
            if expected.is_empty() {
                assert_eq!(rendered, "-", "{kind} on {}", scenario.name);
            } else {
                assert!(!rendered.is_empty(), "{kind} on {}", scenario.name);
            }
        }
    }
}
