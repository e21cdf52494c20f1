use crate::sirius::{RefDataItem, ValidationError};

use super::form::RemovalForm;
use super::roster::AttorneyRoster;

pub const REMOVE_ATTORNEY_ERROR: &str = "removeAttorney";
pub const REMOVED_REASON_ERROR: &str = "removedReason";
pub const ENABLE_ATTORNEY_ERROR: &str = "enableAttorney";
pub const DECISION_ATTORNEY_ERROR: &str = "decisionAttorney";
pub const ATTORNEY_ACTION_ERROR: &str = "attorneyAction";

const SELECT_ATTORNEY: &str = "Please select an attorney for removal";
const SELECT_REASON: &str = "Please select a reason for removal";
const SELECT_VALID_REASON: &str = "Please select a valid reason for removal";
const ENABLE_AND_SKIP: &str =
    "Please do not select both a replacement attorney and the option to skip";
const ENABLE_OR_SKIP: &str =
    "Please select either the attorneys that can be enabled or skip the replacement of the attorneys";
const DECISION_OR_SKIP: &str =
    "Select who cannot make joint decisions, or select 'Joint decisions can be made by all attorneys'";
pub(crate) const SELECT_ACTION: &str = "Please select an option to manage attorneys.";

/// Required-field and enable/skip rules for the removal step. Every rule runs.
pub fn validate_removal(form: &RemovalForm) -> ValidationError {
    let mut errors = ValidationError::default();

    if form.removed_attorney_uid.is_empty() {
        errors.insert(REMOVE_ATTORNEY_ERROR, SELECT_ATTORNEY);
    }
    if form.removed_reason.is_empty() {
        errors.insert(REMOVED_REASON_ERROR, SELECT_REASON);
    }

    let enabling = !form.enabled_attorney_uids.is_empty();
    if enabling && form.skip_enable_attorney {
        errors.insert(ENABLE_ATTORNEY_ERROR, ENABLE_AND_SKIP);
    }
    if !enabling && !form.skip_enable_attorney {
        errors.insert(ENABLE_ATTORNEY_ERROR, ENABLE_OR_SKIP);
    }

    errors
}

/// Exactly one of "some attorneys cannot decide jointly" or "all can" must be chosen.
pub fn validate_decision_selection(selected: &[String], skip: bool) -> ValidationError {
    let mut errors = ValidationError::default();
    if selected.is_empty() != skip {
        errors.insert(DECISION_ATTORNEY_ERROR, DECISION_OR_SKIP);
    }
    errors
}

/// Checks submitted values against the case they claim to modify.
///
/// Blank fields are left to [`validate_removal`].
pub fn validate_against_case(
    form: &RemovalForm,
    roster: &AttorneyRoster,
    removed_reasons: &[RefDataItem],
) -> ValidationError {
    let mut errors = ValidationError::default();

    if !form.removed_attorney_uid.is_empty()
        && roster.find_active(&form.removed_attorney_uid).is_none()
    {
        errors.insert(REMOVE_ATTORNEY_ERROR, SELECT_ATTORNEY);
    }

    if !form.removed_reason.is_empty()
        && !removed_reasons
            .iter()
            .any(|reason| reason.handle == form.removed_reason)
    {
        errors.insert(REMOVED_REASON_ERROR, SELECT_VALID_REASON);
    }

    errors
}
