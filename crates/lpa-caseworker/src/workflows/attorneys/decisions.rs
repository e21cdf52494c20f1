use std::collections::HashSet;

use crate::sirius::{AttorneyDecision, AttorneyStatus, AttorneyUpdatedStatus, LpaStoreAttorney};

use super::form::RemovalForm;
use super::roster::AttorneyRoster;

/// Attorneys able to make decisions once the removal goes through: `active` attorneys other than
/// the removed one, followed by the `inactive` attorneys being enabled, each in case order.
pub fn decision_candidates(
    attorneys: &[LpaStoreAttorney],
    removed_uid: &str,
    enabled_uids: &[String],
) -> Vec<LpaStoreAttorney> {
    let remaining = attorneys
        .iter()
        .filter(|attorney| attorney.status == AttorneyStatus::Active && attorney.uid != removed_uid);
    let enabled = attorneys.iter().filter(|attorney| {
        attorney.status == AttorneyStatus::Inactive && enabled_uids.contains(&attorney.uid)
    });

    remaining.chain(enabled).cloned().collect()
}

/// The removal plus every requested enablement of a dormant attorney, as one batch.
pub fn status_changes(form: &RemovalForm, roster: &AttorneyRoster) -> Vec<AttorneyUpdatedStatus> {
    let removed = roster
        .find_active(&form.removed_attorney_uid)
        .map(|attorney| AttorneyUpdatedStatus {
            uid: attorney.uid.clone(),
            status: AttorneyStatus::Removed,
            removed_reason: Some(form.removed_reason.clone()),
        });

    let enabled = roster
        .inactive
        .iter()
        .filter(|attorney| form.enabled_attorney_uids.contains(&attorney.uid))
        .map(|attorney| AttorneyUpdatedStatus {
            uid: attorney.uid.clone(),
            status: AttorneyStatus::Active,
            removed_reason: None,
        });

    removed.into_iter().chain(enabled).collect()
}

/// One flag per candidate, set for the attorneys the caseworker selected.
pub fn flag_selected(candidates: &[LpaStoreAttorney], selected: &[String]) -> Vec<AttorneyDecision> {
    candidates
        .iter()
        .map(|attorney| AttorneyDecision {
            uid: attorney.uid.clone(),
            cannot_make_joint_decisions: selected.contains(&attorney.uid),
        })
        .collect()
}

/// Clears the flag on every attorney given, once per UID.
pub fn clear_flags<'a, I>(attorneys: I) -> Vec<AttorneyDecision>
where
    I: IntoIterator<Item = &'a LpaStoreAttorney>,
{
    let mut seen = HashSet::new();
    attorneys
        .into_iter()
        .filter(|attorney| seen.insert(attorney.uid.clone()))
        .map(|attorney| AttorneyDecision {
            uid: attorney.uid.clone(),
            cannot_make_joint_decisions: false,
        })
        .collect()
}

/// Decision batch sent after a removal on a "jointly for some" LPA.
pub fn removal_decisions(
    form: &RemovalForm,
    roster: &AttorneyRoster,
    candidates: &[LpaStoreAttorney],
) -> Vec<AttorneyDecision> {
    if form.skip_decision_attorney {
        return clear_flags(roster.active.iter().chain(candidates));
    }

    let mut decisions = flag_selected(candidates, &form.decision_attorney_uids);
    if let Some(removed) = roster.find_active(&form.removed_attorney_uid) {
        decisions.push(AttorneyDecision {
            uid: removed.uid.clone(),
            cannot_make_joint_decisions: false,
        });
    }
    decisions
}
