//! Built-in demo dataset.
//!
//! The whole product is a demo: every record below is literal data defined
//! once at startup and never mutated. Dates and totals are part of the
//! fixture contract (tests assert against them), so edits here ripple.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::inventory::{InventoryRecord, StockLevels, StockStatus};
use super::prediction::{Prediction, Priority};
use super::traceability::{JourneyStep, TraceabilityRecord};
use super::warranty::{OwnershipEntry, WarrantyRecord, WarrantyStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().expect("fixture timestamp")
}

pub fn inventory() -> Vec<InventoryRecord> {
    vec![
        InventoryRecord {
            id: "P001".into(),
            name: "Organic Apples".into(),
            category: "Fresh Produce".into(),
            stock: StockLevels { chennai: 245, delhi: 189, mumbai: 312, total: 746 },
            ai_prediction: "Restock Chennai in 3 days".into(),
            status: StockStatus::Optimal,
            last_updated: timestamp(2024, 1, 13, 10, 30),
        },
        InventoryRecord {
            id: "P002".into(),
            name: "Basmati Rice 5kg".into(),
            category: "Grains".into(),
            stock: StockLevels { chennai: 89, delhi: 245, mumbai: 156, total: 490 },
            ai_prediction: "Low stock alert - Chennai".into(),
            status: StockStatus::Low,
            last_updated: timestamp(2024, 1, 13, 9, 15),
        },
        InventoryRecord {
            id: "P003".into(),
            name: "LED TV 55inch".into(),
            category: "Electronics".into(),
            stock: StockLevels { chennai: 23, delhi: 45, mumbai: 31, total: 99 },
            ai_prediction: "Normal demand expected".into(),
            status: StockStatus::Optimal,
            last_updated: timestamp(2024, 1, 13, 8, 45),
        },
        InventoryRecord {
            id: "P004".into(),
            name: "Cotton T-Shirts".into(),
            category: "Apparel".into(),
            stock: StockLevels { chennai: 445, delhi: 623, mumbai: 378, total: 1446 },
            ai_prediction: "High demand surge predicted".into(),
            status: StockStatus::Surplus,
            last_updated: timestamp(2024, 1, 13, 11, 0),
        },
    ]
}

pub fn traceability() -> Vec<TraceabilityRecord> {
    vec![
        TraceabilityRecord {
            product_id: "P001".into(),
            name: "Organic Apples".into(),
            authenticity: "Verified".into(),
            co2_impact: "Low (2.1 kg CO₂)".into(),
            ethical_sourcing: "Fair Trade Certified".into(),
            journey: vec![
                JourneyStep {
                    stage: "Farm".into(),
                    location: "Punjab, India".into(),
                    date: date(2024, 1, 5),
                    details: "Organic farm certified by USDA".into(),
                    verified: true,
                },
                JourneyStep {
                    stage: "Processing".into(),
                    location: "Delhi Processing Center".into(),
                    date: date(2024, 1, 7),
                    details: "Quality inspection and packaging".into(),
                    verified: true,
                },
                JourneyStep {
                    stage: "Distribution".into(),
                    location: "Regional Warehouse".into(),
                    date: date(2024, 1, 9),
                    details: "Temperature-controlled storage".into(),
                    verified: true,
                },
                JourneyStep {
                    stage: "Store".into(),
                    location: "Walmart Chennai".into(),
                    date: date(2024, 1, 11),
                    details: "Available for purchase".into(),
                    verified: true,
                },
            ],
        },
        TraceabilityRecord {
            product_id: "P002".into(),
            name: "Basmati Rice 5kg".into(),
            authenticity: "Verified".into(),
            co2_impact: "Medium (5.8 kg CO₂)".into(),
            ethical_sourcing: "Sustainable Farming".into(),
            journey: vec![
                JourneyStep {
                    stage: "Farm".into(),
                    location: "Haryana, India".into(),
                    date: date(2023, 11, 15),
                    details: "Traditional basmati cultivation".into(),
                    verified: true,
                },
                JourneyStep {
                    stage: "Mill".into(),
                    location: "Punjab Rice Mill".into(),
                    date: date(2023, 12, 20),
                    details: "Processing and quality control".into(),
                    verified: true,
                },
                JourneyStep {
                    stage: "Distribution".into(),
                    location: "Central Warehouse".into(),
                    date: date(2024, 1, 3),
                    details: "Bulk distribution to stores".into(),
                    verified: true,
                },
                JourneyStep {
                    stage: "Store".into(),
                    location: "Walmart Delhi".into(),
                    date: date(2024, 1, 8),
                    details: "Ready for sale".into(),
                    verified: true,
                },
            ],
        },
    ]
}

pub fn warranties() -> Vec<WarrantyRecord> {
    vec![
        WarrantyRecord {
            id: "W001".into(),
            product_id: "P003".into(),
            product_name: "LED TV 55inch".into(),
            purchase_date: date(2024, 1, 10),
            warranty_period: "24 months".into(),
            status: WarrantyStatus::Active,
            coverage: "Manufacturing defects, parts replacement".into(),
            ownership_log: vec![OwnershipEntry {
                owner: "John Doe".into(),
                address: "123 Main St, Chennai".into(),
                purchase_date: date(2024, 1, 10),
                verified: true,
            }],
            return_eligible: true,
            serial_number: "TV55LED240110001".into(),
        },
        WarrantyRecord {
            id: "W002".into(),
            product_id: "P004".into(),
            product_name: "Cotton T-Shirts".into(),
            purchase_date: date(2024, 1, 12),
            warranty_period: "6 months".into(),
            status: WarrantyStatus::Active,
            coverage: "Fabric quality, color fastness".into(),
            ownership_log: vec![OwnershipEntry {
                owner: "Jane Smith".into(),
                address: "456 Park Ave, Mumbai".into(),
                purchase_date: date(2024, 1, 12),
                verified: true,
            }],
            return_eligible: true,
            serial_number: "CT240112001".into(),
        },
    ]
}

pub fn predictions() -> Vec<Prediction> {
    vec![
        Prediction {
            kind: "restock".into(),
            priority: Priority::High,
            message: "Chennai store needs apple restock in 3 days".into(),
            confidence: 94,
            action: "Auto-order 200 units".into(),
        },
        Prediction {
            kind: "demand_surge".into(),
            priority: Priority::Medium,
            message: "T-shirt demand may increase by 40% next week".into(),
            confidence: 87,
            action: "Consider promotion".into(),
        },
        Prediction {
            kind: "seasonal".into(),
            priority: Priority::Low,
            message: "Winter clothing demand declining".into(),
            confidence: 76,
            action: "Plan clearance sale".into(),
        },
    ]
}
