//! Quotation Totals Engine
//!
//! Pure numeric aggregation over the selected project's costings and the
//! user-edited quantity map. No hidden state: totals are recomputed from
//! their arguments on every render, and display rounding happens only in
//! the view layer.

use std::collections::HashMap;

use crate::models::Costing;

/// Seed quantity applied to every line when a project is selected
pub const DEFAULT_QUANTITY: u32 = 10_000;

/// Parse a quantity input field. Invalid or empty input counts as 0.
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Total for one line: quantity (default 0) times unit price (default 0)
pub fn row_total(costing: &Costing, quantities: &HashMap<u32, u32>) -> f64 {
    let qty = quantities.get(&costing.id).copied().unwrap_or(0);
    qty as f64 * costing.unit_price()
}

/// Sum of row totals over the current item set; 0 for an empty set
pub fn grand_total(costings: &[Costing], quantities: &HashMap<u32, u32>) -> f64 {
    costings.iter().map(|c| row_total(c, quantities)).sum()
}

/// Fresh quantity map for a newly selected project: every line seeded
pub fn seed_quantities(costings: &[Costing]) -> HashMap<u32, u32> {
    costings.iter().map(|c| (c.id, DEFAULT_QUANTITY)).collect()
}

/// Total units across all lines, for the summary card
pub fn total_quantity(quantities: &HashMap<u32, u32>) -> u64 {
    quantities.values().map(|q| *q as u64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceField;

    fn costing(id: u32, price: PriceField) -> Costing {
        Costing {
            id,
            project_code: "VAL-01".to_string(),
            product_name: format!("Product {}", id),
            status: Default::default(),
            sku_ml: None,
            final_unit_price: price,
            moq: None,
            created_at: None,
        }
    }

    fn text_price(s: &str) -> PriceField {
        PriceField::Text(s.to_string())
    }

    #[test]
    fn row_total_multiplies_quantity_and_price() {
        let item = costing(1, text_price("12.50"));
        let quantities = HashMap::from([(1, 3)]);
        assert_eq!(row_total(&item, &quantities), 37.5);
    }

    #[test]
    fn row_total_is_zero_without_a_quantity_entry() {
        let item = costing(1, text_price("12.50"));
        assert_eq!(row_total(&item, &HashMap::new()), 0.0);
    }

    #[test]
    fn row_total_is_zero_for_unparsable_price() {
        let quantities = HashMap::from([(1, 500)]);
        let empty = costing(1, text_price(""));
        let garbage = costing(1, text_price("TBD"));
        assert_eq!(row_total(&empty, &quantities), 0.0);
        assert_eq!(row_total(&garbage, &quantities), 0.0);
        assert!(!row_total(&empty, &quantities).is_nan());
    }

    #[test]
    fn grand_total_with_mixed_quantities() {
        // items = [{id:1, price:"12.50"}, {id:2, price:"7"}], q = {1:3, 2:0}
        let items = vec![costing(1, text_price("12.50")), costing(2, text_price("7"))];
        let quantities = HashMap::from([(1, 3), (2, 0)]);
        assert_eq!(row_total(&items[0], &quantities), 37.5);
        assert_eq!(row_total(&items[1], &quantities), 0.0);
        assert_eq!(grand_total(&items, &quantities), 37.5);
    }

    #[test]
    fn grand_total_is_sum_of_row_totals() {
        let items: Vec<Costing> = (1..=5)
            .map(|id| costing(id, PriceField::Number(id as f64 * 1.25)))
            .collect();
        let quantities: HashMap<u32, u32> = (1..=5).map(|id| (id, id * 10)).collect();
        let summed: f64 = items.iter().map(|c| row_total(c, &quantities)).sum();
        assert_eq!(grand_total(&items, &quantities), summed);
    }

    #[test]
    fn grand_total_of_empty_item_set_is_zero() {
        assert_eq!(grand_total(&[], &HashMap::from([(1, 10)])), 0.0);
    }

    #[test]
    fn grand_total_is_idempotent() {
        let items = vec![costing(1, text_price("3.33")), costing(2, PriceField::Number(9.0))];
        let quantities = HashMap::from([(1, 7), (2, 2)]);
        let first = grand_total(&items, &quantities);
        let second = grand_total(&items, &quantities);
        assert_eq!(first, second);
    }

    #[test]
    fn seeding_resets_every_line_to_the_default() {
        let items = vec![costing(1, text_price("2")), costing(2, text_price("3"))];
        let quantities = seed_quantities(&items);
        assert_eq!(quantities.len(), 2);
        assert!(quantities.values().all(|q| *q == DEFAULT_QUANTITY));
        // Seeded grand total: 10000 * sum(unit prices)
        assert_eq!(grand_total(&items, &quantities), DEFAULT_QUANTITY as f64 * 5.0);
    }

    #[test]
    fn seeding_discards_entries_for_other_projects() {
        let items = vec![costing(3, text_price("2"))];
        let quantities = seed_quantities(&items);
        assert!(!quantities.contains_key(&1));
        assert_eq!(quantities.get(&3), Some(&DEFAULT_QUANTITY));
    }

    #[test]
    fn quantity_parse_coerces_invalid_input_to_zero() {
        assert_eq!(parse_quantity("250"), 250);
        assert_eq!(parse_quantity(" 250 "), 250);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("-5"), 0);
        assert_eq!(parse_quantity("2.5"), 0);
    }

    #[test]
    fn total_quantity_sums_all_lines() {
        let quantities = HashMap::from([(1, 10_000), (2, 5_000), (3, 0)]);
        assert_eq!(total_quantity(&quantities), 15_000);
    }
}
