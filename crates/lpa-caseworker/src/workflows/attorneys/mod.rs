//! Attorney lifecycle pages for a digital LPA case.
//!
//! The remove-an-attorney wizard removes one attorney, optionally steps in dormant replacements,
//! and on "jointly for some, severally for others" LPAs reassigns who cannot make joint decisions.
//! Partitioning, validation and decision resolution are pure functions over the case snapshot;
//! only the final confirm step writes back to Sirius.

pub mod decisions;
pub mod form;
pub mod manage;
pub mod roster;
pub mod router;
pub mod validation;
pub mod views;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use decisions::{
    clear_flags, decision_candidates, flag_selected, removal_decisions, status_changes,
};
pub use form::{DecisionsForm, FormDecoder, RemovalForm, RemovalSubmission, WizardStep};
pub use manage::{ManageAttorneysService, ManageDecisionsService};
pub use roster::{AttorneyRoster, RosterGroup};
pub use router::{attorney_router, AttorneyPages};
pub use validation::{validate_against_case, validate_decision_selection, validate_removal};
pub use views::{
    AttorneyDetails, ManageAttorneysView, ManageDecisionsView, PageOutcome, RemoveAttorneyView,
};
pub use wizard::{RemoveAttorneyWizard, UPDATE_SAVED};
