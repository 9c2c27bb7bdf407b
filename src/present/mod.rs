//! # Derived Presentation Values
//!
//! Pure functions over already-loaded catalog data, recomputed on every
//! view. The dataset is static, so there is no caching and no invalidation;
//! every function here must be total — arithmetic edge cases (zero totals,
//! unparsable warranty periods) degrade to a safe default instead of
//! faulting, and every status-to-class mapping carries an explicit default
//! arm.

use chrono::{DateTime, Months, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{Priority, StockStatus, WarrantyStatus};

/// Severity-like display category a badge renderer maps to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayClass {
    Positive,
    Negative,
    Warning,
    Informational,
    Neutral,
}

impl StockStatus {
    /// optimal → positive, low → negative, surplus → informational,
    /// anything else → neutral.
    pub fn display_class(&self) -> DisplayClass {
        match self {
            StockStatus::Optimal => DisplayClass::Positive,
            StockStatus::Low => DisplayClass::Negative,
            StockStatus::Surplus => DisplayClass::Informational,
            StockStatus::Unknown => DisplayClass::Neutral,
        }
    }
}

impl WarrantyStatus {
    pub fn display_class(&self) -> DisplayClass {
        match self {
            WarrantyStatus::Active => DisplayClass::Positive,
            WarrantyStatus::Expired => DisplayClass::Negative,
            WarrantyStatus::Pending => DisplayClass::Warning,
            WarrantyStatus::Unknown => DisplayClass::Neutral,
        }
    }
}

impl Priority {
    pub fn display_class(&self) -> DisplayClass {
        match self {
            Priority::High => DisplayClass::Negative,
            Priority::Medium => DisplayClass::Warning,
            Priority::Low => DisplayClass::Positive,
            Priority::Unknown => DisplayClass::Neutral,
        }
    }
}

/// Icon category for a journey stage. Stage names in the data are free
/// text; classification is case-insensitive with unrecognised names
/// falling into [`StageKind::Unknown`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Source,
    Processing,
    Distribution,
    Retail,
    Unknown,
}

impl StageKind {
    pub fn classify(stage: &str) -> Self {
        match stage.to_ascii_lowercase().as_str() {
            "farm" => Self::Source,
            "processing" | "mill" => Self::Processing,
            "distribution" => Self::Distribution,
            "store" => Self::Retail,
            _ => Self::Unknown,
        }
    }
}

/// Share of total stock held at one location, rounded to whole percent.
/// A zero total yields 0 rather than a division fault.
pub fn stock_percentage(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

/// Parses the leading integer of a "<N> <unit>" warranty period.
///
/// Only the digit prefix is consumed. The unit is assumed to be months;
/// a different unit is logged and still treated as months, pending a
/// fixture that actually uses one.
pub fn warranty_period_months(period: &str) -> Option<u32> {
    let trimmed = period.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    let months: u32 = digits.parse().ok()?;
    let unit = trimmed[digits.len()..].trim();
    if !unit.is_empty() && !unit.eq_ignore_ascii_case("month") && !unit.eq_ignore_ascii_case("months") {
        warn!(period, "Unrecognised warranty period unit, assuming months");
    }
    Some(months)
}

/// Whole days of warranty coverage left as of `today`, clamped at 0 once
/// past expiry. Expiry is purchase date plus the period in calendar
/// months; an unparsable period degrades to 0 remaining days.
pub fn warranty_days_remaining(purchase_date: NaiveDate, period: &str, today: NaiveDate) -> i64 {
    let Some(months) = warranty_period_months(period) else {
        return 0;
    };
    let Some(expiry) = purchase_date.checked_add_months(Months::new(months)) else {
        return 0;
    };
    (expiry - today).num_days().max(0)
}

/// A cosmetic "blockchain hash": "0x" plus 40 random hex characters.
///
/// This has no integrity property whatsoever. It exists purely so the
/// warranty detail panel has something hash-shaped to display; a real
/// ledger would need an actual hashing subsystem.
pub fn pseudo_tx_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut hash = String::with_capacity(42);
    hash.push_str("0x");
    for _ in 0..40 {
        let nibble = rng.gen_range(0..16u32);
        hash.push(char::from_digit(nibble, 16).unwrap_or('0'));
    }
    hash
}

/// Reference number for a submitted warranty claim: "WC" + unix millis.
pub fn claim_reference(now: DateTime<Utc>) -> String {
    format!("WC{}", now.timestamp_millis())
}

/// The fixed "Blockchain Verification" panel on the traceability page.
/// Every field is a literal; nothing is computed or verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainPanel {
    pub transaction_hash: String,
    pub block_number: u64,
    pub network: String,
    pub gas_used: String,
}

impl BlockchainPanel {
    pub fn fixed() -> Self {
        Self {
            transaction_hash:
                "0x742d35cc6572a0c26c48c9a3a8e8fd6e1c3b8e5f2a4d7c9b8a6e5f4d3c2b1a0".into(),
            block_number: 18_542_315,
            network: "Ethereum Mainnet".into(),
            gas_used: "21,000 Wei".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn stock_percentage_rounds_to_whole_percent() {
        assert_eq!(stock_percentage(245, 746), 33);
        assert_eq!(stock_percentage(189, 746), 25);
        assert_eq!(stock_percentage(312, 746), 42);
        assert_eq!(stock_percentage(99, 99), 100);
    }

    #[test]
    fn stock_percentage_with_zero_total_is_zero() {
        assert_eq!(stock_percentage(0, 0), 0);
        assert_eq!(stock_percentage(50, 0), 0);
    }

    #[test]
    fn period_parse_consumes_leading_integer_only() {
        assert_eq!(warranty_period_months("24 months"), Some(24));
        assert_eq!(warranty_period_months("6 months"), Some(6));
        assert_eq!(warranty_period_months("12months"), Some(12));
        assert_eq!(warranty_period_months("  18 months "), Some(18));
        // Unknown units are accepted (as months) but logged.
        assert_eq!(warranty_period_months("2 years"), Some(2));
        assert_eq!(warranty_period_months("months"), None);
        assert_eq!(warranty_period_months(""), None);
    }

    #[test]
    fn days_remaining_counts_to_calendar_expiry() {
        let purchase = date(2024, 1, 10);
        // 24 months out expires 2026-01-10.
        assert_eq!(
            warranty_days_remaining(purchase, "24 months", date(2026, 1, 9)),
            1
        );
        assert_eq!(
            warranty_days_remaining(purchase, "24 months", date(2025, 1, 10)),
            365
        );
        assert_eq!(
            warranty_days_remaining(purchase, "24 months", date(2026, 1, 10)),
            0
        );
    }

    #[test]
    fn days_remaining_clamps_after_expiry() {
        let purchase = date(2024, 1, 10);
        assert_eq!(
            warranty_days_remaining(purchase, "24 months", date(2026, 6, 1)),
            0
        );
    }

    #[test]
    fn days_remaining_with_unparsable_period_is_zero() {
        let purchase = date(2024, 1, 10);
        assert_eq!(warranty_days_remaining(purchase, "forever", date(2024, 2, 1)), 0);
    }

    #[test]
    fn expiry_clamps_short_months() {
        // Jan 31 + 1 month lands on Feb 29 in a leap year, not a fault.
        assert_eq!(
            warranty_days_remaining(date(2024, 1, 31), "1 month", date(2024, 2, 28)),
            1
        );
    }

    #[test]
    fn status_classification_is_total() {
        assert_eq!(StockStatus::Optimal.display_class(), DisplayClass::Positive);
        assert_eq!(StockStatus::Low.display_class(), DisplayClass::Negative);
        assert_eq!(StockStatus::Surplus.display_class(), DisplayClass::Informational);
        assert_eq!(StockStatus::parse("definitely-new").display_class(), DisplayClass::Neutral);

        assert_eq!(WarrantyStatus::Active.display_class(), DisplayClass::Positive);
        assert_eq!(WarrantyStatus::parse("ACTIVE").display_class(), DisplayClass::Positive);
        assert_eq!(WarrantyStatus::parse("???").display_class(), DisplayClass::Neutral);

        assert_eq!(Priority::parse("high").display_class(), DisplayClass::Negative);
        assert_eq!(Priority::parse("urgent!!").display_class(), DisplayClass::Neutral);
    }

    #[test]
    fn stage_classification_is_case_insensitive_with_default() {
        assert_eq!(StageKind::classify("Farm"), StageKind::Source);
        assert_eq!(StageKind::classify("FARM"), StageKind::Source);
        assert_eq!(StageKind::classify("Mill"), StageKind::Processing);
        assert_eq!(StageKind::classify("Processing"), StageKind::Processing);
        assert_eq!(StageKind::classify("Distribution"), StageKind::Distribution);
        assert_eq!(StageKind::classify("Store"), StageKind::Retail);
        assert_eq!(StageKind::classify("Customs"), StageKind::Unknown);
    }

    #[test]
    fn pseudo_hash_is_hex_shaped() {
        let mut rng = StdRng::seed_from_u64(42);
        let hash = pseudo_tx_hash(&mut rng);
        assert_eq!(hash.len(), 42);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn claim_reference_embeds_millis() {
        let now = chrono::Utc.with_ymd_and_hms(2024, 1, 13, 12, 0, 0).unwrap();
        assert_eq!(claim_reference(now), format!("WC{}", now.timestamp_millis()));
    }
}
