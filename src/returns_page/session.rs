//! Session state machine for the warranty & returns page.
//!
//! Holds at most one selected warranty id plus the claim form. Submitting
//! a claim never writes anywhere: success is a notification carrying a
//! generated reference, and the only state change is the form clearing.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::catalog::{Catalog, WarrantyRecord};
use crate::framework::PageSession;
use crate::notify::Notifier;
use crate::present::{claim_reference, pseudo_tx_hash, warranty_days_remaining};

use super::commands::{
    ClaimForm, ClaimUpdate, ReturnsCommand, ReturnsReply, WarrantyView,
};

#[derive(Debug, Default)]
pub struct ReturnsSession {
    selected: Option<String>,
    form: ClaimForm,
}

#[async_trait]
impl PageSession for ReturnsSession {
    type Command = ReturnsCommand;
    type Reply = ReturnsReply;
    type Context = (Arc<Catalog>, Notifier);

    async fn handle(
        &mut self,
        command: ReturnsCommand,
        ctx: &Self::Context,
    ) -> Result<ReturnsReply, String> {
        let (catalog, notifier) = ctx;
        match command {
            ReturnsCommand::Search(input) => {
                match catalog.warranty(&input) {
                    Some(record) => {
                        self.selected = Some(record.id.clone());
                        notifier.notify(
                            "Warranty Found",
                            format!("Loaded warranty information for {}", record.product_name),
                        );
                    }
                    None => {
                        self.selected = None;
                        notifier.notify_destructive(
                            "Warranty Not Found",
                            "Please check the product ID, serial number, or warranty ID",
                        );
                    }
                }
                Ok(ReturnsReply::Selection(self.selected.clone()))
            }
            ReturnsCommand::UpdateClaim(update) => {
                self.apply_claim_update(update);
                Ok(ReturnsReply::Form(self.form.clone()))
            }
            ReturnsCommand::SubmitClaim => {
                let selected = self
                    .selected
                    .as_deref()
                    .and_then(|id| catalog.warranty(id));
                let form_complete =
                    self.form.issue.is_some() && !self.form.description.trim().is_empty();

                let Some(record) = selected.filter(|_| form_complete) else {
                    notifier.notify_destructive(
                        "Incomplete Form",
                        "Please fill in all required fields",
                    );
                    return Ok(ReturnsReply::ClaimSubmitted(None));
                };

                let reference = claim_reference(Utc::now());
                info!(
                    warranty_id = %record.id,
                    reference = %reference,
                    "Warranty claim submitted"
                );
                notifier.notify(
                    "Claim Submitted Successfully",
                    format!(
                        "Your warranty claim for {} has been submitted. Reference: {}",
                        record.product_name, reference
                    ),
                );
                self.form = ClaimForm::default();
                Ok(ReturnsReply::ClaimSubmitted(Some(reference)))
            }
            ReturnsCommand::View => {
                let view = self
                    .selected
                    .as_deref()
                    .and_then(|id| catalog.warranty(id))
                    .map(|record| self.build_view(record));
                Ok(ReturnsReply::View(view))
            }
        }
    }

    fn reset(&mut self) {
        self.selected = None;
        self.form = ClaimForm::default();
    }
}

impl ReturnsSession {
    fn apply_claim_update(&mut self, update: ClaimUpdate) {
        if let Some(issue) = update.issue {
            self.form.issue = Some(issue);
        }
        if let Some(description) = update.description {
            self.form.description = description;
        }
        if let Some(priority) = update.priority {
            self.form.priority = priority;
        }
    }

    fn build_view(&self, record: &WarrantyRecord) -> WarrantyView {
        let today = Utc::now().date_naive();
        WarrantyView {
            warranty_id: record.id.clone(),
            product_id: record.product_id.clone(),
            product_name: record.product_name.clone(),
            serial_number: record.serial_number.clone(),
            status: record.status,
            status_class: record.status.display_class(),
            warranty_period: record.warranty_period.clone(),
            purchase_date: record.purchase_date,
            days_remaining: warranty_days_remaining(
                record.purchase_date,
                &record.warranty_period,
                today,
            ),
            return_eligible: record.return_eligible,
            coverage: record.coverage.clone(),
            ownership_log: record.ownership_log.clone(),
            blockchain_hash: pseudo_tx_hash(&mut rand::thread_rng()),
            claim_form: self.form.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::commands::{ClaimPriority, IssueKind};
    use crate::notify::{NotificationFeed, Severity};

    fn context() -> ((Arc<Catalog>, Notifier), NotificationFeed) {
        let (notifier, feed) = Notifier::channel();
        ((Arc::new(Catalog::demo()), notifier), feed)
    }

    #[tokio::test]
    async fn search_matches_all_three_key_spaces() {
        let (ctx, mut feed) = context();
        let mut session = ReturnsSession::default();

        for query in ["W001", "P003", "TV55LED240110001"] {
            let reply = session
                .handle(ReturnsCommand::Search(query.into()), &ctx)
                .await
                .unwrap();
            assert_eq!(
                reply,
                ReturnsReply::Selection(Some("W001".into())),
                "query {query} should resolve to W001"
            );
            let toast = feed.try_next().unwrap();
            assert_eq!(toast.title, "Warranty Found");
            assert_eq!(toast.message, "Loaded warranty information for LED TV 55inch");
        }
    }

    #[tokio::test]
    async fn search_miss_clears_selection() {
        let (ctx, mut feed) = context();
        let mut session = ReturnsSession::default();

        session
            .handle(ReturnsCommand::Search("W001".into()), &ctx)
            .await
            .unwrap();
        let reply = session
            .handle(ReturnsCommand::Search("W999".into()), &ctx)
            .await
            .unwrap();
        assert_eq!(reply, ReturnsReply::Selection(None));

        let _hit = feed.try_next().unwrap();
        let miss = feed.try_next().unwrap();
        assert_eq!(miss.title, "Warranty Not Found");
        assert_eq!(miss.severity, Severity::Destructive);

        let view = session.handle(ReturnsCommand::View, &ctx).await.unwrap();
        assert_eq!(view, ReturnsReply::View(None));
    }

    #[tokio::test]
    async fn incomplete_claim_is_rejected_and_form_kept() {
        let (ctx, mut feed) = context();
        let mut session = ReturnsSession::default();

        session
            .handle(ReturnsCommand::Search("W001".into()), &ctx)
            .await
            .unwrap();
        let _hit = feed.try_next().unwrap();

        // Issue chosen but no description.
        session
            .handle(
                ReturnsCommand::UpdateClaim(ClaimUpdate {
                    issue: Some(IssueKind::Defect),
                    ..Default::default()
                }),
                &ctx,
            )
            .await
            .unwrap();

        let reply = session.handle(ReturnsCommand::SubmitClaim, &ctx).await.unwrap();
        assert_eq!(reply, ReturnsReply::ClaimSubmitted(None));

        let toast = feed.try_next().unwrap();
        assert_eq!(toast.title, "Incomplete Form");
        assert_eq!(toast.message, "Please fill in all required fields");
        assert_eq!(toast.severity, Severity::Destructive);

        // The half-filled form survives the rejection.
        let reply = session
            .handle(ReturnsCommand::UpdateClaim(ClaimUpdate::default()), &ctx)
            .await
            .unwrap();
        let ReturnsReply::Form(form) = reply else { panic!("expected form") };
        assert_eq!(form.issue, Some(IssueKind::Defect));
    }

    #[tokio::test]
    async fn claim_without_selection_is_rejected() {
        let (ctx, mut feed) = context();
        let mut session = ReturnsSession::default();

        session
            .handle(
                ReturnsCommand::UpdateClaim(ClaimUpdate {
                    issue: Some(IssueKind::Damage),
                    description: Some("Cracked screen".into()),
                    priority: None,
                }),
                &ctx,
            )
            .await
            .unwrap();

        let reply = session.handle(ReturnsCommand::SubmitClaim, &ctx).await.unwrap();
        assert_eq!(reply, ReturnsReply::ClaimSubmitted(None));
        assert_eq!(feed.try_next().unwrap().title, "Incomplete Form");
    }

    #[tokio::test]
    async fn complete_claim_submits_and_clears_the_form() {
        let (ctx, mut feed) = context();
        let mut session = ReturnsSession::default();

        session
            .handle(ReturnsCommand::Search("W001".into()), &ctx)
            .await
            .unwrap();
        let _hit = feed.try_next().unwrap();

        session
            .handle(
                ReturnsCommand::UpdateClaim(ClaimUpdate {
                    issue: Some(IssueKind::Malfunction),
                    description: Some("No picture after power on".into()),
                    priority: Some(ClaimPriority::High),
                }),
                &ctx,
            )
            .await
            .unwrap();

        let reply = session.handle(ReturnsCommand::SubmitClaim, &ctx).await.unwrap();
        let ReturnsReply::ClaimSubmitted(Some(reference)) = reply else {
            panic!("expected a claim reference");
        };
        assert!(reference.starts_with("WC"));

        let toast = feed.try_next().unwrap();
        assert_eq!(toast.title, "Claim Submitted Successfully");
        assert!(toast
            .message
            .starts_with("Your warranty claim for LED TV 55inch has been submitted."));
        assert!(toast.message.contains(&reference));

        // Form resets; selection survives.
        let reply = session
            .handle(ReturnsCommand::UpdateClaim(ClaimUpdate::default()), &ctx)
            .await
            .unwrap();
        assert_eq!(reply, ReturnsReply::Form(ClaimForm::default()));
        let reply = session.handle(ReturnsCommand::View, &ctx).await.unwrap();
        let ReturnsReply::View(Some(view)) = reply else { panic!("expected view") };
        assert_eq!(view.warranty_id, "W001");
    }

    #[tokio::test]
    async fn view_derives_presentation_fields() {
        let (ctx, _feed) = context();
        let mut session = ReturnsSession::default();

        session
            .handle(ReturnsCommand::Search("CT240112001".into()), &ctx)
            .await
            .unwrap();
        let reply = session.handle(ReturnsCommand::View, &ctx).await.unwrap();
        let ReturnsReply::View(Some(view)) = reply else { panic!("expected view") };

        assert_eq!(view.warranty_id, "W002");
        assert_eq!(view.product_id, "P004");
        assert_eq!(view.status, crate::catalog::WarrantyStatus::Active);
        assert_eq!(view.status_class, crate::present::DisplayClass::Positive);
        assert!(view.days_remaining >= 0);
        assert_eq!(view.ownership_log.len(), 1);
        assert_eq!(view.ownership_log[0].owner, "Jane Smith");
        assert!(view.blockchain_hash.starts_with("0x"));
        assert_eq!(view.blockchain_hash.len(), 42);
    }
}
