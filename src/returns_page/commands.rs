//! Command and view vocabulary for the warranty & returns page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{OwnershipEntry, WarrantyStatus};
use crate::present::DisplayClass;

/// Operations a user can trigger on the returns page.
#[derive(Debug)]
pub enum ReturnsCommand {
    /// One input tried against warranty id, product id, and serial number.
    Search(String),
    /// Edits to the claim form; `None` fields are left untouched.
    UpdateClaim(ClaimUpdate),
    /// Validates and "submits" the claim (a notification, nothing more).
    SubmitClaim,
    /// Current render data: detail when selected, `None` for the empty state.
    View,
}

#[derive(Debug, PartialEq)]
pub enum ReturnsReply {
    Selection(Option<String>),
    Form(ClaimForm),
    /// `Some(reference)` on success, `None` when validation rejected the form.
    ClaimSubmitted(Option<String>),
    View(Option<WarrantyView>),
}

/// Issue categories offered by the claim dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Defect,
    Damage,
    Malfunction,
    Return,
}

/// Priority choices offered by the claim dialog. Distinct from the
/// prediction priority set: claims also allow Urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// The claim dialog's form state. Lives in the page session; cleared on a
/// successful submission, preserved when validation rejects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimForm {
    pub issue: Option<IssueKind>,
    pub description: String,
    pub priority: ClaimPriority,
}

/// DTO for claim form edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimUpdate {
    pub issue: Option<IssueKind>,
    pub description: Option<String>,
    pub priority: Option<ClaimPriority>,
}

/// Everything the warranty detail renderer needs for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarrantyView {
    pub warranty_id: String,
    pub product_id: String,
    pub product_name: String,
    pub serial_number: String,
    pub status: WarrantyStatus,
    pub status_class: DisplayClass,
    pub warranty_period: String,
    pub purchase_date: NaiveDate,
    pub days_remaining: i64,
    pub return_eligible: bool,
    pub coverage: String,
    pub ownership_log: Vec<OwnershipEntry>,
    /// Cosmetic hash, regenerated per render. No integrity property.
    pub blockchain_hash: String,
    pub claim_form: ClaimForm,
}
