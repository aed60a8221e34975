//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Pipeline stages for a sales lead (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    /// Pipeline columns in display order
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Converted,
        LeadStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Converted => "Converted",
            LeadStatus::Lost => "Lost",
        }
    }
}

/// Cosmetic card priority, local to the board and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadPriority {
    High,
    Medium,
    Low,
}

impl Default for LeadPriority {
    fn default() -> Self {
        LeadPriority::Medium
    }
}

impl LeadPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadPriority::High => "high",
            LeadPriority::Medium => "medium",
            LeadPriority::Low => "low",
        }
    }

    /// Click-to-cycle order: high -> medium -> low -> high
    pub fn next(self) -> Self {
        match self {
            LeadPriority::High => LeadPriority::Medium,
            LeadPriority::Medium => LeadPriority::Low,
            LeadPriority::Low => LeadPriority::High,
        }
    }
}

/// Sales lead (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesLead {
    pub id: u32,
    pub company_name: String,
    pub owner: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: LeadStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub segment: Option<String>,
    #[serde(default)]
    pub project_code: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub priority: LeadPriority,
}

/// Costing review state (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostingStatus {
    Draft,
    Approved,
}

impl Default for CostingStatus {
    fn default() -> Self {
        CostingStatus::Draft
    }
}

impl CostingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostingStatus::Draft => "draft",
            CostingStatus::Approved => "approved",
        }
    }
}

/// Unit price as the backend actually sends it: a JSON number, a numeric
/// string, an empty string, or nothing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
    Empty,
}

impl Default for PriceField {
    fn default() -> Self {
        PriceField::Empty
    }
}

impl PriceField {
    /// Defensive numeric read: non-numeric forms resolve to 0, never NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            PriceField::Number(n) if n.is_finite() => *n,
            PriceField::Number(_) => 0.0,
            PriceField::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0),
            PriceField::Empty => 0.0,
        }
    }
}

/// Costing record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Costing {
    pub id: u32,
    pub project_code: String,
    pub product_name: String,
    #[serde(default)]
    pub status: CostingStatus,
    #[serde(default)]
    pub sku_ml: Option<String>,
    #[serde(default)]
    pub final_unit_price: PriceField,
    #[serde(default)]
    pub moq: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Costing {
    pub fn unit_price(&self) -> f64 {
        self.final_unit_price.as_f64()
    }
}

/// Paginated list envelope returned by all list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub has_more: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0, skip: 0, limit: 0, has_more: false }
    }
}

/// Per-status lead counts from the stats endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeadStats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub new: u32,
    #[serde(default)]
    pub contacted: u32,
    #[serde(default)]
    pub qualified: u32,
    #[serde(default)]
    pub converted: u32,
    #[serde(default)]
    pub lost: u32,
}

impl LeadStats {
    /// Client-side fallback when the stats endpoint is unavailable
    pub fn from_leads(leads: &[SalesLead]) -> Self {
        let count = |s: LeadStatus| leads.iter().filter(|l| l.status == s).count() as u32;
        Self {
            total: leads.len() as u32,
            new: count(LeadStatus::New),
            contacted: count(LeadStatus::Contacted),
            qualified: count(LeadStatus::Qualified),
            converted: count(LeadStatus::Converted),
            lost: count(LeadStatus::Lost),
        }
    }

    /// Converted leads as a percentage of all leads (0 when empty)
    pub fn conversion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.converted as f64 / self.total as f64 * 100.0
    }

    /// Lost leads as a percentage of all leads (0 when empty)
    pub fn lost_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.lost as f64 / self.total as f64 * 100.0
    }

    /// Leads still moving through the pipeline
    pub fn active_pipeline(&self) -> u32 {
        self.new + self.contacted + self.qualified
    }
}

/// Login endpoint response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// One priced line of a saved quotation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotationItem {
    pub costing_id: u32,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
}

/// Write payload for saving a quotation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotationDraft {
    pub project_code: String,
    pub items: Vec<QuotationItem>,
    pub grand_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: u32, status: LeadStatus) -> SalesLead {
        SalesLead {
            id,
            company_name: format!("Company {}", id),
            owner: "Owner".to_string(),
            email: None,
            phone: None,
            status,
            location: None,
            segment: None,
            project_code: None,
            notes: None,
            priority: LeadPriority::default(),
        }
    }

    #[test]
    fn price_field_reads_number() {
        assert_eq!(PriceField::Number(12.5).as_f64(), 12.5);
    }

    #[test]
    fn price_field_parses_numeric_string() {
        assert_eq!(PriceField::Text("12.50".to_string()).as_f64(), 12.5);
        assert_eq!(PriceField::Text(" 7 ".to_string()).as_f64(), 7.0);
    }

    #[test]
    fn price_field_defends_against_garbage() {
        assert_eq!(PriceField::Text(String::new()).as_f64(), 0.0);
        assert_eq!(PriceField::Text("N/A".to_string()).as_f64(), 0.0);
        assert_eq!(PriceField::Empty.as_f64(), 0.0);
        assert_eq!(PriceField::Number(f64::NAN).as_f64(), 0.0);
    }

    #[test]
    fn price_field_deserializes_all_wire_shapes() {
        let number: PriceField = serde_json::from_str("42.25").unwrap();
        assert_eq!(number.as_f64(), 42.25);

        let text: PriceField = serde_json::from_str("\"42.25\"").unwrap();
        assert_eq!(text.as_f64(), 42.25);

        let null: PriceField = serde_json::from_str("null").unwrap();
        assert_eq!(null.as_f64(), 0.0);
    }

    #[test]
    fn costing_defaults_price_when_field_is_missing() {
        let costing: Costing = serde_json::from_str(
            r#"{"id":1,"project_code":"VAL-01","product_name":"Serum","sku_ml":null}"#,
        )
        .unwrap();
        assert_eq!(costing.unit_price(), 0.0);
    }

    #[test]
    fn lead_status_round_trips_lowercase() {
        for status in LeadStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: LeadStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn priority_cycles_through_all_three() {
        let start = LeadPriority::High;
        assert_eq!(start.next(), LeadPriority::Medium);
        assert_eq!(start.next().next(), LeadPriority::Low);
        assert_eq!(start.next().next().next(), LeadPriority::High);
    }

    #[test]
    fn missing_priority_defaults_to_medium() {
        let lead: SalesLead = serde_json::from_str(
            r#"{"id":1,"company_name":"Acme","owner":"Jo","email":null,"phone":null,
                "status":"new","location":null,"segment":null,"project_code":null,"notes":null}"#,
        )
        .unwrap();
        assert_eq!(lead.priority, LeadPriority::Medium);
    }

    #[test]
    fn stats_fallback_counts_by_status() {
        let leads = vec![
            lead(1, LeadStatus::New),
            lead(2, LeadStatus::New),
            lead(3, LeadStatus::Converted),
            lead(4, LeadStatus::Lost),
        ];
        let stats = LeadStats::from_leads(&leads);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.new, 2);
        assert_eq!(stats.converted, 1);
        assert_eq!(stats.lost, 1);
        assert_eq!(stats.qualified, 0);
    }

    #[test]
    fn rates_are_percentages_of_total() {
        let stats = LeadStats { total: 8, converted: 2, lost: 4, ..Default::default() };
        assert_eq!(stats.conversion_rate(), 25.0);
        assert_eq!(stats.lost_rate(), 50.0);
    }

    #[test]
    fn rates_are_zero_for_empty_pipeline() {
        let stats = LeadStats::default();
        assert_eq!(stats.conversion_rate(), 0.0);
        assert_eq!(stats.lost_rate(), 0.0);
    }

    #[test]
    fn active_pipeline_excludes_terminal_stages() {
        let stats = LeadStats { total: 10, new: 3, contacted: 2, qualified: 1, converted: 3, lost: 1 };
        assert_eq!(stats.active_pipeline(), 6);
    }
}
