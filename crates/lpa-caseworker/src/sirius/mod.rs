//! Client-side model of the Sirius case API.
//!
//! Each capability the attorney workflows depend on is its own trait in [`ports`], so handlers
//! name exactly the calls they make and tests can substitute in-memory fakes. [`SiriusClient`]
//! implements all of them over HTTP.

mod client;
pub mod error;
pub mod model;
pub mod ports;

pub use client::SiriusClient;
pub use error::{FieldErrors, SiriusError, StatusError, ValidationError};
pub use model::{
    AppointmentType, AttorneyDecision, AttorneyStatus, AttorneyUpdatedStatus, CaseSummary,
    DecisionMode, DigitalLpa, LpaStoreAddress, LpaStoreAttorney, LpaStoreData, RefDataItem,
    SiriusData, Task, Warning,
};
pub use ports::{
    AttorneyDecisionsClient, AttorneyStatusClient, CaseSummaryClient, RefDataClient,
    RemoveAttorneyClient, ATTORNEY_REMOVED_REASON_CATEGORY,
};

/// Caller identity forwarded on every outbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// Raw `Cookie` header from the caseworker's browser session.
    pub cookie_header: Option<String>,
    pub xsrf_token: String,
}
