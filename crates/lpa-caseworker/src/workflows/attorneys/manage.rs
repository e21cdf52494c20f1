use std::sync::Arc;

use tracing::{info, warn};

use crate::sirius::{
    AttorneyDecisionsClient, CaseSummaryClient, Context, SiriusError, ValidationError,
};
use crate::web::{FlashNotification, Template};

use super::decisions::{clear_flags, flag_selected};
use super::form::DecisionsForm;
use super::validation::{validate_decision_selection, ATTORNEY_ACTION_ERROR, SELECT_ACTION};
use super::views::{AttorneyDetails, ManageAttorneysView, ManageDecisionsView, PageOutcome};
use super::wizard::UPDATE_SAVED;

pub const REMOVE_AN_ATTORNEY_ACTION: &str = "remove-an-attorney";
pub const MANAGE_DECISIONS_ACTION: &str = "manage-decisions";

/// Changes joint-decision flags on the active attorneys without removing anyone.
pub struct ManageDecisionsService<C> {
    client: Arc<C>,
}

impl<C> ManageDecisionsService<C>
where
    C: CaseSummaryClient + AttorneyDecisionsClient + 'static,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn show(
        &self,
        ctx: &Context,
        uid: &str,
    ) -> Result<PageOutcome<ManageDecisionsView>, SiriusError> {
        let case_summary = self.client.case_summary(ctx, uid).await?;
        let view = ManageDecisionsView::new(case_summary, &ctx.xsrf_token);
        Ok(PageOutcome::render(Template::ManageDecisions, view))
    }

    pub async fn submit(
        &self,
        ctx: &Context,
        uid: &str,
        form: DecisionsForm,
    ) -> Result<PageOutcome<ManageDecisionsView>, SiriusError> {
        let case_summary = self.client.case_summary(ctx, uid).await?;
        let mut view = ManageDecisionsView::new(case_summary, &ctx.xsrf_token);
        view.form = form;

        let errors = validate_decision_selection(
            &view.form.decision_attorney_uids,
            view.form.skip_decision_attorney,
        );
        if errors.any() {
            view.errors = errors;
            return Ok(PageOutcome::invalid(Template::ManageDecisions, view));
        }

        if !view.form.confirmed {
            view.decision_attorney_details = view
                .decision_attorneys
                .iter()
                .filter(|attorney| view.form.decision_attorney_uids.contains(&attorney.uid))
                .map(AttorneyDetails::from)
                .collect();
            return Ok(PageOutcome::render(Template::ConfirmDecisions, view));
        }

        let decisions = if view.form.skip_decision_attorney {
            clear_flags(&view.decision_attorneys)
        } else {
            flag_selected(&view.decision_attorneys, &view.form.decision_attorney_uids)
        };

        let case_uid = view.case_summary.digital_lpa.uid.clone();
        match self
            .client
            .manage_attorney_decisions(ctx, &case_uid, &decisions)
            .await
        {
            Ok(()) => {
                info!(case_uid = %case_uid, attorneys = decisions.len(), "attorney decisions saved");
                Ok(PageOutcome::redirect(format!("/lpa/{case_uid}"))
                    .with_flash(FlashNotification::new(UPDATE_SAVED)))
            }
            Err(SiriusError::Validation(validation)) => {
                warn!(detail = %validation, "sirius rejected attorney decisions");
                view.errors = validation;
                Ok(PageOutcome::invalid(Template::ManageDecisions, view))
            }
            Err(other) => Err(other),
        }
    }
}

/// Landing page that sends the caseworker to the attorney workflow they picked.
pub struct ManageAttorneysService<C> {
    client: Arc<C>,
}

impl<C> ManageAttorneysService<C>
where
    C: CaseSummaryClient + 'static,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn show(
        &self,
        ctx: &Context,
        uid: &str,
    ) -> Result<PageOutcome<ManageAttorneysView>, SiriusError> {
        let view = self.view(ctx, uid, String::new()).await?;
        Ok(PageOutcome::render(Template::ManageAttorneys, view))
    }

    pub async fn submit(
        &self,
        ctx: &Context,
        uid: &str,
        action: String,
    ) -> Result<PageOutcome<ManageAttorneysView>, SiriusError> {
        let mut view = self.view(ctx, uid, action).await?;

        let case_uid = view.case_summary.digital_lpa.uid.clone();
        let location = match view.attorney_action.as_str() {
            REMOVE_AN_ATTORNEY_ACTION => Some(format!("/lpa/{case_uid}/remove-an-attorney")),
            MANAGE_DECISIONS_ACTION => Some(format!("/lpa/{case_uid}/manage-attorney-decisions")),
            _ => None,
        };

        match location {
            Some(location) => Ok(PageOutcome::redirect(location)),
            None => {
                view.errors.insert(ATTORNEY_ACTION_ERROR, SELECT_ACTION);
                Ok(PageOutcome::invalid(Template::ManageAttorneys, view))
            }
        }
    }

    async fn view(
        &self,
        ctx: &Context,
        uid: &str,
        attorney_action: String,
    ) -> Result<ManageAttorneysView, SiriusError> {
        let case_summary = self.client.case_summary(ctx, uid).await?;
        Ok(ManageAttorneysView {
            case_summary,
            attorney_action,
            errors: ValidationError::default(),
            xsrf_token: ctx.xsrf_token.clone(),
        })
    }
}
