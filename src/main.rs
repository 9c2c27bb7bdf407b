//! Scripted tour of the four demo pages.
//!
//! Drives each page the way a user clicking through the demo would —
//! search, scan, ship, restock, file a claim — and logs every toast the
//! pages emit along the way.

use chaintrust::clients::PageClient;
use chaintrust::lifecycle::{setup_tracing, DemoSystem};
use chaintrust::returns_page::{ClaimPriority, ClaimUpdate, IssueKind};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting demo tour");

    let mut system = DemoSystem::new();

    // --- Home ---
    let overview = system
        .home_client
        .overview()
        .await
        .map_err(|e| e.to_string())?;
    info!(
        products = overview.stats.products_tracked,
        locations = overview.stats.total_locations,
        "Loaded landing page"
    );

    // --- Inventory ---
    let dashboard = system
        .inventory_client
        .view()
        .await
        .map_err(|e| e.to_string())?;
    info!(rows = dashboard.rows.len(), "Loaded inventory dashboard");

    system
        .inventory_client
        .ship("P001", "Mumbai", "Chennai")
        .await
        .map_err(|e| e.to_string())?;
    system
        .inventory_client
        .restock("P002")
        .await
        .map_err(|e| e.to_string())?;

    // --- Traceability ---
    system
        .traceability_client
        .search("P001")
        .await
        .map_err(|e| e.to_string())?;
    if let Some(view) = system
        .traceability_client
        .view()
        .await
        .map_err(|e| e.to_string())?
    {
        info!(product = %view.name, steps = view.journey.len(), "Traceability journey loaded");
    }

    let scanned = system
        .traceability_client
        .scan_qr()
        .await
        .map_err(|e| e.to_string())?;
    info!(?scanned, "Simulated QR scan");

    // --- Returns ---
    system
        .returns_client
        .search("W001")
        .await
        .map_err(|e| e.to_string())?;
    system
        .returns_client
        .update_claim(ClaimUpdate {
            issue: Some(IssueKind::Malfunction),
            description: Some("No picture after power on".into()),
            priority: Some(ClaimPriority::High),
        })
        .await
        .map_err(|e| e.to_string())?;
    let reference = system
        .returns_client
        .submit_claim()
        .await
        .map_err(|e| e.to_string())?;
    info!(?reference, "Claim submitted");

    // Back to the landing page: navigation resets the returns session.
    system
        .returns_client
        .reset()
        .await
        .map_err(|e| e.to_string())?;

    // Drain and display every toast the tour produced.
    while let Some(toast) = system.notifications.try_next() {
        info!(
            title = %toast.title,
            severity = ?toast.severity,
            "{}",
            toast.message
        );
    }

    system.shutdown().await?;

    Ok(())
}
