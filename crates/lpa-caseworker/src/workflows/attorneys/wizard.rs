use std::sync::Arc;

use tracing::{info, warn};

use crate::sirius::{
    CaseSummary, Context, RefDataItem, RemoveAttorneyClient, SiriusError,
    ATTORNEY_REMOVED_REASON_CATEGORY,
};
use crate::web::{FlashNotification, Template};

use super::decisions::{removal_decisions, status_changes};
use super::form::{RemovalSubmission, WizardStep};
use super::roster::AttorneyRoster;
use super::validation::{validate_against_case, validate_decision_selection, validate_removal};
use super::views::{PageOutcome, RemoveAttorneyView};

pub const UPDATE_SAVED: &str = "Update saved";

/// Drives the `remove` -> `decision` -> `confirm` flow for removing an attorney from a case.
pub struct RemoveAttorneyWizard<C> {
    client: Arc<C>,
}

impl<C> RemoveAttorneyWizard<C>
where
    C: RemoveAttorneyClient + 'static,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    async fn load(
        &self,
        ctx: &Context,
        uid: &str,
    ) -> Result<(CaseSummary, Vec<RefDataItem>), SiriusError> {
        tokio::try_join!(
            self.client.case_summary(ctx, uid),
            self.client
                .ref_data_by_category(ctx, ATTORNEY_REMOVED_REASON_CATEGORY)
        )
    }

    /// First page of the wizard. Reads only.
    pub async fn show(
        &self,
        ctx: &Context,
        uid: &str,
    ) -> Result<PageOutcome<RemoveAttorneyView>, SiriusError> {
        let (case_summary, reasons) = self.load(ctx, uid).await?;
        let view = RemoveAttorneyView::new(case_summary, reasons, &ctx.xsrf_token);
        Ok(PageOutcome::render(Template::RemoveAttorney, view))
    }

    pub async fn submit(
        &self,
        ctx: &Context,
        uid: &str,
        submission: RemovalSubmission,
    ) -> Result<PageOutcome<RemoveAttorneyView>, SiriusError> {
        let (case_summary, reasons) = self.load(ctx, uid).await?;
        let mut view = RemoveAttorneyView::new(case_summary, reasons, &ctx.xsrf_token);
        let roster = AttorneyRoster::partition(view.case_summary.attorneys());
        let step = submission.step;
        view.form = submission.form;
        view.step = step;

        let mut errors = validate_removal(&view.form);
        errors.merge(validate_against_case(
            &view.form,
            &roster,
            &view.removed_reasons,
        ));
        if step == WizardStep::Decision && view.requires_decisions() {
            errors.merge(validate_decision_selection(
                &view.form.decision_attorney_uids,
                view.form.skip_decision_attorney,
            ));
        }

        if errors.any() {
            view.errors = errors;
            let template = match step {
                WizardStep::Remove => Template::RemoveAttorney,
                WizardStep::Decision => {
                    view.recompute_decision_attorneys();
                    Template::DecisionAttorney
                }
                WizardStep::Confirm => {
                    view.build_details();
                    Template::ConfirmRemoval
                }
            };
            return Ok(PageOutcome::invalid(template, view));
        }

        match step {
            WizardStep::Confirm => self.commit(ctx, view, &roster).await,
            WizardStep::Decision => {
                view.build_details();
                view.step = WizardStep::Confirm;
                Ok(PageOutcome::render(Template::ConfirmRemoval, view))
            }
            WizardStep::Remove if view.requires_decisions() => {
                view.recompute_decision_attorneys();
                view.step = WizardStep::Decision;
                Ok(PageOutcome::render(Template::DecisionAttorney, view))
            }
            WizardStep::Remove => {
                view.build_details();
                view.step = WizardStep::Confirm;
                Ok(PageOutcome::render(Template::ConfirmRemoval, view))
            }
        }
    }

    /// Sends the status batch, then the decision batch when the LPA needs one.
    ///
    /// A rejected decision batch leaves the status changes in place.
    async fn commit(
        &self,
        ctx: &Context,
        mut view: RemoveAttorneyView,
        roster: &AttorneyRoster,
    ) -> Result<PageOutcome<RemoveAttorneyView>, SiriusError> {
        let case_uid = view.case_summary.digital_lpa.uid.clone();
        view.build_details();

        let statuses = status_changes(&view.form, roster);
        if let Err(error) = self
            .client
            .change_attorney_status(ctx, &case_uid, &statuses)
            .await
        {
            return reject(view, error);
        }

        if view.requires_decisions() {
            let decisions = removal_decisions(&view.form, roster, &view.decision_attorneys);
            if let Err(error) = self
                .client
                .manage_attorney_decisions(ctx, &case_uid, &decisions)
                .await
            {
                return reject(view, error);
            }
        }

        info!(
            case_uid = %case_uid,
            removed = %view.form.removed_attorney_uid,
            enabled = view.form.enabled_attorney_uids.len(),
            "attorney removal saved"
        );

        Ok(PageOutcome::redirect(format!("/lpa/{case_uid}"))
            .with_flash(FlashNotification::new(UPDATE_SAVED)))
    }
}

fn reject(
    mut view: RemoveAttorneyView,
    error: SiriusError,
) -> Result<PageOutcome<RemoveAttorneyView>, SiriusError> {
    match error {
        SiriusError::Validation(validation) => {
            warn!(detail = %validation, "sirius rejected attorney removal");
            view.errors = validation;
            Ok(PageOutcome::invalid(Template::ConfirmRemoval, view))
        }
        other => Err(other),
    }
}
