//! Quotation Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: quantity
//! edits touch one map entry without re-rendering the costing list.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Costing;
use crate::totals::{self, DEFAULT_QUANTITY};

/// Quotation builder state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct QuoteState {
    /// Every costing fetched, across all projects
    pub costings: Vec<Costing>,
    /// Currently selected project code
    pub selected_project: String,
    /// Raw quantity inputs exactly as typed, keyed by costing id
    pub quantity_inputs: HashMap<u32, String>,
}

/// Type alias for the store
pub type QuoteStore = Store<QuoteState>;

// ========================
// Store Helper Functions
// ========================

/// Costings belonging to the selected project, in fetch order
pub fn project_costings(store: &QuoteStore) -> Vec<Costing> {
    let code = store.selected_project().get();
    store
        .costings()
        .with(|all| all.iter().filter(|c| c.project_code == code).cloned().collect())
}

/// Parsed quantity map for the totals engine; invalid input reads as 0
pub fn parsed_quantities(store: &QuoteStore) -> HashMap<u32, u32> {
    store.quantity_inputs().with(|inputs| {
        inputs.iter().map(|(id, raw)| (*id, totals::parse_quantity(raw))).collect()
    })
}

/// Select a project: the old quantity map is discarded entirely and every
/// line of the new project is seeded with the default quantity
pub fn store_select_project(store: &QuoteStore, code: String) {
    store.selected_project().set(code);
    let seeded: HashMap<u32, String> = project_costings(store)
        .iter()
        .map(|c| (c.id, DEFAULT_QUANTITY.to_string()))
        .collect();
    store.quantity_inputs().set(seeded);
}

/// Record a quantity field edit, preserving the raw text as typed
pub fn store_set_quantity(store: &QuoteStore, costing_id: u32, raw: String) {
    store.quantity_inputs().write().insert(costing_id, raw);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceField;

    fn costing(id: u32, code: &str, price: &str) -> Costing {
        Costing {
            id,
            project_code: code.to_string(),
            product_name: format!("Product {}", id),
            status: Default::default(),
            sku_ml: None,
            final_unit_price: PriceField::Text(price.to_string()),
            moq: None,
            created_at: None,
        }
    }

    #[test]
    fn selecting_a_project_seeds_its_lines_only() {
        let store = Store::new(QuoteState::default());
        store.costings().set(vec![
            costing(1, "VAL-01", "2.00"),
            costing(2, "VAL-01", "3.00"),
            costing(3, "VAL-02", "9.99"),
        ]);

        store_select_project(&store, "VAL-01".to_string());

        let inputs = store.quantity_inputs().get_untracked();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs.get(&1).map(String::as_str), Some("10000"));
        assert_eq!(inputs.get(&2).map(String::as_str), Some("10000"));
        assert!(!inputs.contains_key(&3));
    }

    #[test]
    fn switching_projects_discards_edited_quantities() {
        let store = Store::new(QuoteState::default());
        store.costings().set(vec![costing(1, "VAL-01", "2.00"), costing(3, "VAL-02", "9.99")]);

        store_select_project(&store, "VAL-01".to_string());
        store_set_quantity(&store, 1, "777".to_string());
        store_select_project(&store, "VAL-02".to_string());

        let inputs = store.quantity_inputs().get_untracked();
        assert!(!inputs.contains_key(&1));
        assert_eq!(inputs.get(&3).map(String::as_str), Some("10000"));
    }

    #[test]
    fn raw_text_is_preserved_but_parses_defensively() {
        let store = Store::new(QuoteState::default());
        store.costings().set(vec![costing(1, "VAL-01", "2.00")]);
        store_select_project(&store, "VAL-01".to_string());

        store_set_quantity(&store, 1, "12x".to_string());
        assert_eq!(
            store.quantity_inputs().get_untracked().get(&1).map(String::as_str),
            Some("12x")
        );
        assert_eq!(parsed_quantities(&store).get(&1), Some(&0));
    }

    #[test]
    fn seeded_grand_total_matches_price_sum() {
        let store = Store::new(QuoteState::default());
        let items = vec![costing(1, "VAL-01", "2.00"), costing(2, "VAL-01", "3.00")];
        store.costings().set(items.clone());
        store_select_project(&store, "VAL-01".to_string());

        let quantities = parsed_quantities(&store);
        assert_eq!(
            totals::grand_total(&items, &quantities),
            DEFAULT_QUANTITY as f64 * 5.0
        );
    }
}
