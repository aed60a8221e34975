//! Costing Endpoints
//!
//! List/create/update/duplicate/delete for costing records. Creation goes
//! through the form endpoint the backend exposes, so the payload is
//! urlencoded rather than JSON.

use serde::Serialize;

use super::{delete, get_json, post_form, post_no_content, put_json, ApiError};
use crate::models::{Costing, CostingStatus, Page};
use crate::session::SessionContext;

// ========================
// Query & Payload Structs
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CostingQuery {
    pub skip: u32,
    pub limit: u32,
    pub project_code: String,
    pub status: Option<CostingStatus>,
    pub search: String,
}

impl Default for CostingQuery {
    fn default() -> Self {
        Self { skip: 0, limit: 50, project_code: String::new(), status: None, search: String::new() }
    }
}

impl CostingQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("skip", self.skip.to_string()), ("limit", self.limit.to_string())];
        if !self.project_code.is_empty() {
            params.push(("project_code", self.project_code.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params
    }
}

/// Write payload for creating/updating a costing. Numeric fields stay as
/// typed; the backend parses them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostingDraft {
    pub project_code: String,
    pub product_name: String,
    pub status: CostingStatus,
    pub sku_ml: String,
    pub final_unit_price: String,
    pub moq: String,
}

impl Default for CostingDraft {
    fn default() -> Self {
        Self {
            project_code: String::new(),
            product_name: String::new(),
            status: CostingStatus::Draft,
            sku_ml: String::new(),
            final_unit_price: String::new(),
            moq: String::new(),
        }
    }
}

impl CostingDraft {
    pub fn from_costing(costing: &Costing) -> Self {
        Self {
            project_code: costing.project_code.clone(),
            product_name: costing.product_name.clone(),
            status: costing.status,
            sku_ml: costing.sku_ml.clone().unwrap_or_default(),
            final_unit_price: match costing.unit_price() {
                price if price > 0.0 => format!("{}", price),
                _ => String::new(),
            },
            moq: costing.moq.map(|m| m.to_string()).unwrap_or_default(),
        }
    }

    fn to_form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("project_code", self.project_code.as_str()),
            ("product_name", self.product_name.as_str()),
            ("status", self.status.as_str()),
            ("sku_ml", self.sku_ml.as_str()),
            ("final_unit_price", self.final_unit_price.as_str()),
            ("moq", self.moq.as_str()),
        ]
    }
}

// ========================
// Endpoints
// ========================

pub async fn list_costings(
    session: SessionContext,
    query: &CostingQuery,
) -> Result<Page<Costing>, ApiError> {
    get_json(session, "/costings/", &query.to_params()).await
}

pub async fn create_costing(session: SessionContext, draft: &CostingDraft) -> Result<Costing, ApiError> {
    post_form(session, "/costing/new/form/", &draft.to_form_fields()).await
}

pub async fn update_costing(
    session: SessionContext,
    id: u32,
    draft: &CostingDraft,
) -> Result<Costing, ApiError> {
    put_json(session, &format!("/costing/{}/edit/", id), draft).await
}

/// Server-side copy; callers refetch the list for the new record
pub async fn duplicate_costing(session: SessionContext, id: u32) -> Result<(), ApiError> {
    post_no_content(session, &format!("/costing/{}/duplicate/", id)).await
}

pub async fn delete_costing(session: SessionContext, id: u32) -> Result<(), ApiError> {
    delete(session, &format!("/costing/{}/", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceField;

    #[test]
    fn draft_round_trips_costing_fields() {
        let costing = Costing {
            id: 7,
            project_code: "VAL-03".to_string(),
            product_name: "Face Serum".to_string(),
            status: CostingStatus::Approved,
            sku_ml: Some("30".to_string()),
            final_unit_price: PriceField::Text("42.50".to_string()),
            moq: Some(5000),
            created_at: None,
        };
        let draft = CostingDraft::from_costing(&costing);
        assert_eq!(draft.project_code, "VAL-03");
        assert_eq!(draft.final_unit_price, "42.5");
        assert_eq!(draft.moq, "5000");
    }

    #[test]
    fn draft_leaves_unknown_price_blank() {
        let costing = Costing {
            id: 7,
            project_code: "VAL-03".to_string(),
            product_name: "Face Serum".to_string(),
            status: CostingStatus::Draft,
            sku_ml: None,
            final_unit_price: PriceField::Empty,
            moq: None,
            created_at: None,
        };
        let draft = CostingDraft::from_costing(&costing);
        assert_eq!(draft.final_unit_price, "");
        assert_eq!(draft.moq, "");
    }
}
