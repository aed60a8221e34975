//! List Query Utilities
//!
//! Shared helpers for the paginated list views: a stale-response guard,
//! the board's client-side search filter, and pagination arithmetic.

use leptos::prelude::*;

use crate::models::{Costing, SalesLead};

/// Monotonic request-generation counter.
///
/// Every fetch takes a ticket before going to the network; the response is
/// applied only if its ticket is still the latest issued for that query.
/// A superseded fetch is not aborted, its result just lands on the floor,
/// which closes the last-response-wins race on rapid filter changes.
#[derive(Clone, Copy)]
pub struct QuerySequence {
    issued: RwSignal<u64>,
}

impl QuerySequence {
    pub fn new() -> Self {
        Self { issued: RwSignal::new(0) }
    }

    /// Issue a new ticket, invalidating all earlier ones
    pub fn begin(&self) -> u64 {
        self.issued.update_untracked(|v| *v += 1);
        self.issued.get_untracked()
    }

    /// True while `ticket` is still the latest issued
    pub fn is_current(&self, ticket: u64) -> bool {
        self.issued.get_untracked() == ticket
    }
}

impl Default for QuerySequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive search over the fields shown on a board card
pub fn filter_leads(leads: &[SalesLead], term: &str) -> Vec<SalesLead> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return leads.to_vec();
    }
    let matches = |field: &Option<String>| {
        field.as_deref().map(|v| v.to_lowercase().contains(&term)).unwrap_or(false)
    };
    leads
        .iter()
        .filter(|lead| {
            lead.company_name.to_lowercase().contains(&term)
                || lead.owner.to_lowercase().contains(&term)
                || matches(&lead.email)
                || matches(&lead.project_code)
                || matches(&lead.notes)
        })
        .cloned()
        .collect()
}

/// Project codes in first-seen order, without duplicates
pub fn unique_project_codes(costings: &[Costing]) -> Vec<String> {
    let mut codes = Vec::new();
    for costing in costings {
        if !costing.project_code.is_empty() && !codes.contains(&costing.project_code) {
            codes.push(costing.project_code.clone());
        }
    }
    codes
}

/// Number of pages needed to show `total` rows at `limit` per page
pub fn page_count(total: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeadPriority, LeadStatus, PriceField};

    fn lead(id: u32, company: &str, notes: Option<&str>) -> SalesLead {
        SalesLead {
            id,
            company_name: company.to_string(),
            owner: "Priya".to_string(),
            email: Some(format!("contact@{}.example", company.to_lowercase())),
            phone: None,
            status: LeadStatus::New,
            location: None,
            segment: None,
            project_code: Some(format!("VAL-{:02}", id)),
            notes: notes.map(|n| n.to_string()),
            priority: LeadPriority::default(),
        }
    }

    fn costing(id: u32, code: &str) -> Costing {
        Costing {
            id,
            project_code: code.to_string(),
            product_name: "Serum".to_string(),
            status: Default::default(),
            sku_ml: None,
            final_unit_price: PriceField::Empty,
            moq: None,
            created_at: None,
        }
    }

    #[test]
    fn sequence_invalidates_earlier_tickets() {
        let seq = QuerySequence::new();
        let first = seq.begin();
        assert!(seq.is_current(first));
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn blank_term_returns_everything() {
        let leads = vec![lead(1, "Acme", None), lead(2, "Globex", None)];
        assert_eq!(filter_leads(&leads, "").len(), 2);
        assert_eq!(filter_leads(&leads, "   ").len(), 2);
    }

    #[test]
    fn filter_matches_across_card_fields() {
        let leads = vec![
            lead(1, "Acme", Some("wants spring pricing")),
            lead(2, "Globex", None),
        ];
        assert_eq!(filter_leads(&leads, "acme").len(), 1);
        assert_eq!(filter_leads(&leads, "SPRING").len(), 1);
        assert_eq!(filter_leads(&leads, "val-02").len(), 1);
        assert_eq!(filter_leads(&leads, "priya").len(), 2);
        assert!(filter_leads(&leads, "nomatch").is_empty());
    }

    #[test]
    fn project_codes_deduplicate_in_order() {
        let costings = vec![
            costing(1, "VAL-01"),
            costing(2, "VAL-02"),
            costing(3, "VAL-01"),
            costing(4, ""),
        ];
        assert_eq!(unique_project_codes(&costings), vec!["VAL-01", "VAL-02"]);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 50), 0);
        assert_eq!(page_count(50, 50), 1);
        assert_eq!(page_count(51, 50), 2);
        assert_eq!(page_count(10, 0), 0);
    }
}
