use serde::Serialize;

use crate::web::{FormError, FormFields};

pub const REMOVED_ATTORNEY_FIELD: &str = "removedAttorney";
pub const REMOVED_REASON_FIELD: &str = "removedReason";
pub const ENABLED_ATTORNEY_FIELD: &str = "enabledAttorney";
pub const SKIP_ENABLE_ATTORNEY_FIELD: &str = "skipEnableAttorney";
pub const DECISION_ATTORNEY_FIELD: &str = "decisionAttorney";
pub const SKIP_DECISION_ATTORNEY_FIELD: &str = "skipDecisionAttorney";
pub const STEP_FIELD: &str = "step";
pub const CONFIRM_DECISIONS_FIELD: &str = "confirmDecisions";
pub const ATTORNEY_ACTION_FIELD: &str = "attorneyAction";

/// Position in the remove-an-attorney wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Remove,
    Decision,
    Confirm,
}

impl WizardStep {
    /// Unset and unrecognised values start the wizard from the beginning.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "decision" => Self::Decision,
            "confirm" => Self::Confirm,
            _ => Self::Remove,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remove => "remove",
            Self::Decision => "decision",
            Self::Confirm => "confirm",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalForm {
    pub removed_attorney_uid: String,
    pub removed_reason: String,
    pub enabled_attorney_uids: Vec<String>,
    pub skip_enable_attorney: bool,
    pub decision_attorney_uids: Vec<String>,
    pub skip_decision_attorney: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSubmission {
    pub form: RemovalForm,
    pub step: WizardStep,
}

/// Joint-decision selection posted from the standalone decisions page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecisionsForm {
    pub decision_attorney_uids: Vec<String>,
    pub skip_decision_attorney: bool,
    #[serde(skip)]
    pub confirmed: bool,
}

/// Maps posted fields onto the workflow forms.
#[derive(Debug, Clone)]
pub struct FormDecoder {
    checked_value: String,
}

impl Default for FormDecoder {
    fn default() -> Self {
        Self::new("yes")
    }
}

impl FormDecoder {
    pub fn new(checked_value: impl Into<String>) -> Self {
        Self {
            checked_value: checked_value.into(),
        }
    }

    pub fn removal(&self, fields: &FormFields) -> Result<RemovalSubmission, FormError> {
        let form = RemovalForm {
            removed_attorney_uid: fields.value(REMOVED_ATTORNEY_FIELD)?.trim().to_string(),
            removed_reason: fields.value(REMOVED_REASON_FIELD)?.trim().to_string(),
            enabled_attorney_uids: fields.values(ENABLED_ATTORNEY_FIELD),
            skip_enable_attorney: fields
                .checkbox_checked(SKIP_ENABLE_ATTORNEY_FIELD, &self.checked_value),
            decision_attorney_uids: fields.values(DECISION_ATTORNEY_FIELD),
            skip_decision_attorney: fields
                .checkbox_checked(SKIP_DECISION_ATTORNEY_FIELD, &self.checked_value),
        };

        Ok(RemovalSubmission {
            form,
            step: WizardStep::parse(&fields.value(STEP_FIELD)?),
        })
    }

    pub fn decisions(&self, fields: &FormFields) -> Result<DecisionsForm, FormError> {
        Ok(DecisionsForm {
            decision_attorney_uids: fields.values(DECISION_ATTORNEY_FIELD),
            skip_decision_attorney: fields
                .checkbox_checked(SKIP_DECISION_ATTORNEY_FIELD, &self.checked_value),
            confirmed: fields.is_set(CONFIRM_DECISIONS_FIELD),
        })
    }

    pub fn attorney_action(&self, fields: &FormFields) -> Result<String, FormError> {
        Ok(fields.value(ATTORNEY_ACTION_FIELD)?.trim().to_string())
    }
}
