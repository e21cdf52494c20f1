use axum::http::StatusCode;
use serde::Serialize;

use crate::sirius::{
    AttorneyStatus, CaseSummary, DecisionMode, LpaStoreAttorney, RefDataItem, ValidationError,
};
use crate::web::{FlashNotification, Template};

use super::decisions::decision_candidates;
use super::form::{DecisionsForm, RemovalForm, WizardStep};
use super::roster::AttorneyRoster;

/// What a workflow asks the HTTP layer to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome<V> {
    Render {
        template: Template,
        status: StatusCode,
        view: V,
    },
    Redirect {
        location: String,
        flash: Option<FlashNotification>,
    },
}

impl<V> PageOutcome<V> {
    pub fn render(template: Template, view: V) -> Self {
        Self::Render {
            template,
            status: StatusCode::OK,
            view,
        }
    }

    pub fn invalid(template: Template, view: V) -> Self {
        Self::Render {
            template,
            status: StatusCode::BAD_REQUEST,
            view,
        }
    }

    pub fn redirect(location: String) -> Self {
        Self::Redirect {
            location,
            flash: None,
        }
    }

    pub fn with_flash(self, flash: FlashNotification) -> Self {
        match self {
            Self::Redirect { location, .. } => Self::Redirect {
                location,
                flash: Some(flash),
            },
            render => render,
        }
    }
}

/// Summary line for an attorney on confirmation pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttorneyDetails {
    pub name: String,
    pub date_of_birth: String,
    pub appointment_type: String,
}

impl From<&LpaStoreAttorney> for AttorneyDetails {
    fn from(attorney: &LpaStoreAttorney) -> Self {
        Self {
            name: attorney.full_name(),
            date_of_birth: attorney.date_of_birth_display(),
            appointment_type: attorney.appointment_type.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveAttorneyView {
    pub case_summary: CaseSummary,
    pub form_name: &'static str,
    pub step: WizardStep,
    pub form: RemovalForm,
    pub active_attorneys: Vec<LpaStoreAttorney>,
    pub inactive_attorneys: Vec<LpaStoreAttorney>,
    pub decision_attorneys: Vec<LpaStoreAttorney>,
    pub removed_reasons: Vec<RefDataItem>,
    pub removed_reason: Option<RefDataItem>,
    pub removed_attorney_details: Option<AttorneyDetails>,
    pub enabled_attorney_details: Vec<AttorneyDetails>,
    pub decision_attorney_details: Vec<AttorneyDetails>,
    pub active_attorney_count: usize,
    pub replacement_attorney_count: usize,
    pub decisions: DecisionMode,
    pub replacement_attorney_decisions: DecisionMode,
    pub errors: ValidationError,
    pub xsrf_token: String,
}

impl RemoveAttorneyView {
    /// Roster and reference data for the case; nothing about the caseworker's choices yet.
    pub fn new(case_summary: CaseSummary, reasons: Vec<RefDataItem>, xsrf_token: &str) -> Self {
        let roster = AttorneyRoster::partition(case_summary.attorneys());
        let subtype = case_summary.subtype().to_string();
        let decisions = case_summary.decisions().clone();
        let replacement_attorney_decisions = roster
            .effective_replacement_decisions(&decisions, case_summary.replacement_decisions());

        Self {
            form_name: "remove",
            step: WizardStep::Remove,
            form: RemovalForm::default(),
            active_attorney_count: roster.active_status_count(),
            replacement_attorney_count: roster.dormant_replacement_count(),
            active_attorneys: roster.active,
            inactive_attorneys: roster.inactive,
            decision_attorneys: Vec::new(),
            removed_reasons: reasons
                .into_iter()
                .filter(|reason| reason.is_valid_for(&subtype))
                .collect(),
            removed_reason: None,
            removed_attorney_details: None,
            enabled_attorney_details: Vec::new(),
            decision_attorney_details: Vec::new(),
            decisions,
            replacement_attorney_decisions,
            errors: ValidationError::default(),
            xsrf_token: xsrf_token.to_string(),
            case_summary,
        }
    }

    pub fn requires_decisions(&self) -> bool {
        self.decisions.requires_per_attorney_decisions()
    }

    pub fn recompute_decision_attorneys(&mut self) {
        self.decision_attorneys = decision_candidates(
            self.case_summary.attorneys(),
            &self.form.removed_attorney_uid,
            &self.form.enabled_attorney_uids,
        );
    }

    /// Fills in everything the confirmation page summarises.
    pub fn build_details(&mut self) {
        self.recompute_decision_attorneys();

        self.removed_attorney_details = self
            .active_attorneys
            .iter()
            .find(|attorney| attorney.uid == self.form.removed_attorney_uid)
            .map(AttorneyDetails::from);
        self.enabled_attorney_details = self
            .inactive_attorneys
            .iter()
            .filter(|attorney| self.form.enabled_attorney_uids.contains(&attorney.uid))
            .map(AttorneyDetails::from)
            .collect();
        self.decision_attorney_details = self
            .decision_attorneys
            .iter()
            .filter(|attorney| self.form.decision_attorney_uids.contains(&attorney.uid))
            .map(AttorneyDetails::from)
            .collect();
        self.removed_reason = self
            .removed_reasons
            .iter()
            .find(|reason| reason.handle == self.form.removed_reason)
            .cloned();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManageDecisionsView {
    pub case_summary: CaseSummary,
    pub form_name: &'static str,
    pub form: DecisionsForm,
    pub decision_attorneys: Vec<LpaStoreAttorney>,
    pub decision_attorney_details: Vec<AttorneyDetails>,
    pub active_attorney_count: usize,
    pub replacement_attorney_count: usize,
    pub decisions: DecisionMode,
    pub replacement_attorney_decisions: DecisionMode,
    pub errors: ValidationError,
    pub xsrf_token: String,
}

impl ManageDecisionsView {
    pub fn new(case_summary: CaseSummary, xsrf_token: &str) -> Self {
        let roster = AttorneyRoster::partition(case_summary.attorneys());
        let decisions = case_summary.decisions().clone();
        let replacement_attorney_decisions = roster
            .effective_replacement_decisions(&decisions, case_summary.replacement_decisions());
        let decision_attorneys = roster
            .active
            .iter()
            .filter(|attorney| attorney.status == AttorneyStatus::Active)
            .cloned()
            .collect();

        Self {
            form_name: "decisions",
            form: DecisionsForm::default(),
            decision_attorneys,
            decision_attorney_details: Vec::new(),
            active_attorney_count: roster.active_status_count(),
            replacement_attorney_count: roster.dormant_replacement_count(),
            decisions,
            replacement_attorney_decisions,
            errors: ValidationError::default(),
            xsrf_token: xsrf_token.to_string(),
            case_summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManageAttorneysView {
    pub case_summary: CaseSummary,
    pub attorney_action: String,
    pub errors: ValidationError,
    pub xsrf_token: String,
}
