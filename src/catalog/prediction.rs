use serde::{Deserialize, Serialize};

/// A canned "AI" insight shown in the predictions sidebar.
///
/// There is no model behind these; each is a fixed message with a
/// confidence figure chosen for visual effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Free-form tag such as "restock" or "demand_surge".
    pub kind: String,
    pub priority: Priority,
    pub message: String,
    /// Percentage in 0–100.
    pub confidence: u8,
    /// Suggested follow-up, rendered as a button label.
    pub action: String,
}

/// Priority of a prediction. Total parse; unknown strings become
/// [`Priority::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    Unknown,
}

impl Priority {
    pub fn parse(s: &str) -> Self {
        match s {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unknown,
        }
    }
}
