//! Lead Endpoints
//!
//! List/create/update/delete for sales leads, plus the single-field
//! status PATCH used by the pipeline board.

use serde::Serialize;

use super::{delete, get_json, patch_json, post_json, ApiError};
use crate::models::{LeadStats, LeadStatus, Page, SalesLead};
use crate::session::SessionContext;

// ========================
// Query & Payload Structs
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct LeadQuery {
    pub skip: u32,
    pub limit: u32,
    pub status: Option<LeadStatus>,
    pub location: String,
    pub search: String,
}

impl Default for LeadQuery {
    fn default() -> Self {
        Self { skip: 0, limit: 50, status: None, location: String::new(), search: String::new() }
    }
}

impl LeadQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("skip", self.skip.to_string()), ("limit", self.limit.to_string())];
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if !self.location.is_empty() {
            params.push(("location", self.location.clone()));
        }
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params
    }
}

/// Write payload for creating/updating a lead
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadDraft {
    pub company_name: String,
    pub owner: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    pub location: String,
    pub segment: String,
    pub project_code: String,
    pub notes: String,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            owner: String::new(),
            email: String::new(),
            phone: String::new(),
            status: LeadStatus::New,
            location: String::new(),
            segment: String::new(),
            project_code: String::new(),
            notes: String::new(),
        }
    }
}

impl LeadDraft {
    pub fn from_lead(lead: &SalesLead) -> Self {
        Self {
            company_name: lead.company_name.clone(),
            owner: lead.owner.clone(),
            email: lead.email.clone().unwrap_or_default(),
            phone: lead.phone.clone().unwrap_or_default(),
            status: lead.status,
            location: lead.location.clone().unwrap_or_default(),
            segment: lead.segment.clone().unwrap_or_default(),
            project_code: lead.project_code.clone().unwrap_or_default(),
            notes: lead.notes.clone().unwrap_or_default(),
        }
    }
}

/// Single-field PATCH body for a pipeline move
#[derive(Serialize)]
struct StatusPatch {
    status: LeadStatus,
}

// ========================
// Endpoints
// ========================

pub async fn list_leads(session: SessionContext, query: &LeadQuery) -> Result<Page<SalesLead>, ApiError> {
    get_json(session, "/leads/", &query.to_params()).await
}

pub async fn lead_stats(session: SessionContext) -> Result<LeadStats, ApiError> {
    get_json(session, "/leads/stats/", &[]).await
}

pub async fn create_lead(session: SessionContext, draft: &LeadDraft) -> Result<SalesLead, ApiError> {
    post_json(session, "/leads/", draft).await
}

pub async fn update_lead(session: SessionContext, id: u32, draft: &LeadDraft) -> Result<SalesLead, ApiError> {
    patch_json(session, &format!("/leads/{}/", id), draft).await
}

/// Persist a pipeline move, carrying only the changed field
pub async fn update_lead_status(
    session: SessionContext,
    id: u32,
    status: LeadStatus,
) -> Result<SalesLead, ApiError> {
    patch_json(session, &format!("/leads/{}/status/", id), &StatusPatch { status }).await
}

pub async fn delete_lead(session: SessionContext, id: u32) -> Result<(), ApiError> {
    delete(session, &format!("/leads/{}/", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_include_pagination_always() {
        let params = LeadQuery::default().to_params();
        assert!(params.contains(&("skip", "0".to_string())));
        assert!(params.contains(&("limit", "50".to_string())));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn query_params_skip_blank_filters() {
        let query = LeadQuery {
            skip: 100,
            limit: 50,
            status: Some(LeadStatus::Qualified),
            location: String::new(),
            search: "acme".to_string(),
        };
        let params = query.to_params();
        assert!(params.contains(&("status", "qualified".to_string())));
        assert!(params.contains(&("search", "acme".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "location"));
    }
}
