//! Quotation Endpoints

use super::{post_json, ApiError};
use crate::models::QuotationDraft;
use crate::session::SessionContext;

/// Persist a generated quotation. The response body (the stored record)
/// is not needed by the view.
pub async fn save_quotation(session: SessionContext, draft: &QuotationDraft) -> Result<(), ApiError> {
    let _: serde_json::Value = post_json(session, "/quotations/", draft).await?;
    Ok(())
}
