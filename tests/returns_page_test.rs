use chaintrust::clients::PageClient;
use chaintrust::lifecycle::DemoSystem;
use chaintrust::notify::Severity;
use chaintrust::returns_page::{ClaimForm, ClaimPriority, ClaimUpdate, IssueKind};

/// The claim flow end to end: reject while incomplete, accept once the
/// form is filled, clear the form afterwards.
#[tokio::test]
async fn test_claim_lifecycle() {
    let mut system = DemoSystem::new();

    // Find the warranty by serial number.
    let selected = system
        .returns_client
        .search("CT240112001")
        .await
        .expect("Failed to search");
    assert_eq!(selected.as_deref(), Some("W002"));
    let toast = system.notifications.next().await.expect("Expected toast");
    assert_eq!(toast.message, "Loaded warranty information for Cotton T-Shirts");

    // Submitting an empty form is rejected; the selection stays.
    let reference = system
        .returns_client
        .submit_claim()
        .await
        .expect("Failed to submit");
    assert!(reference.is_none());
    let toast = system.notifications.next().await.expect("Expected rejection");
    assert_eq!(toast.title, "Incomplete Form");
    assert_eq!(toast.severity, Severity::Destructive);

    // Fill the form field by field, like the dialog does.
    let form = system
        .returns_client
        .update_claim(ClaimUpdate {
            issue: Some(IssueKind::Defect),
            ..Default::default()
        })
        .await
        .expect("Failed to update claim");
    assert_eq!(form.issue, Some(IssueKind::Defect));
    assert_eq!(form.priority, ClaimPriority::Medium, "priority defaults to medium");

    let form = system
        .returns_client
        .update_claim(ClaimUpdate {
            description: Some("Color faded after one wash".into()),
            priority: Some(ClaimPriority::Urgent),
            ..Default::default()
        })
        .await
        .expect("Failed to update claim");
    assert_eq!(form.description, "Color faded after one wash");
    assert_eq!(form.priority, ClaimPriority::Urgent);

    // Now the submission goes through and carries a reference.
    let reference = system
        .returns_client
        .submit_claim()
        .await
        .expect("Failed to submit")
        .expect("Complete claim must be accepted");
    assert!(reference.starts_with("WC"));
    let toast = system.notifications.next().await.expect("Expected success toast");
    assert_eq!(toast.title, "Claim Submitted Successfully");
    assert!(toast.message.contains("Cotton T-Shirts"));
    assert!(toast.message.contains(&reference));

    // Success clears the form but keeps the selection.
    let form = system
        .returns_client
        .update_claim(ClaimUpdate::default())
        .await
        .expect("Failed to read form");
    assert_eq!(form, ClaimForm::default());
    let view = system
        .returns_client
        .view()
        .await
        .expect("Failed to load view")
        .expect("Selection must survive a submission");
    assert_eq!(view.warranty_id, "W002");

    // Navigation resets everything.
    system.returns_client.reset().await.expect("Failed to reset");
    let view = system.returns_client.view().await.expect("Failed to load view");
    assert!(view.is_none());

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Unknown queries miss every key space, clear the selection, and never
/// become an `Err`.
#[tokio::test]
async fn test_unknown_query_is_a_soft_miss() {
    let mut system = DemoSystem::new();

    let selected = system
        .returns_client
        .search("definitely-not-a-key")
        .await
        .expect("A miss must not be an Err");
    assert!(selected.is_none());

    let toast = system.notifications.next().await.expect("Expected miss toast");
    assert_eq!(toast.title, "Warranty Not Found");
    assert_eq!(toast.message, "Please check the product ID, serial number, or warranty ID");
    assert_eq!(toast.severity, Severity::Destructive);

    let view = system.returns_client.view().await.expect("Failed to load view");
    assert!(view.is_none());

    system.shutdown().await.expect("Failed to shutdown system");
}
