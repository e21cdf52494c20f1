use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::sirius::{
    AppointmentType, AttorneyDecision, AttorneyDecisionsClient, AttorneyStatus,
    AttorneyStatusClient, AttorneyUpdatedStatus, CaseSummary, CaseSummaryClient, Context,
    DecisionMode, DigitalLpa, LpaStoreAttorney, LpaStoreData, RefDataClient, RefDataItem,
    SiriusData, SiriusError, StatusError, ValidationError,
};
use crate::web::{JsonRenderer, WebSettings};
use crate::workflows::attorneys::{
    attorney_router, AttorneyPages, RemovalForm, RemovalSubmission, WizardStep,
};

pub(crate) const CASE_UID: &str = "M-1111-2222-3333";

pub(crate) fn attorney(
    uid: &str,
    status: AttorneyStatus,
    appointment_type: AppointmentType,
) -> LpaStoreAttorney {
    LpaStoreAttorney {
        uid: uid.to_string(),
        first_names: format!("{uid} First"),
        last_name: "Attorney".to_string(),
        address: Default::default(),
        date_of_birth: "1980-01-31".to_string(),
        email: String::new(),
        mobile: String::new(),
        signed_at: String::new(),
        status,
        appointment_type,
        cannot_make_joint_decisions: false,
    }
}

/// U1 and U2 active, U3 and U4 dormant replacements, U5 already removed.
pub(crate) fn scenario_attorneys() -> Vec<LpaStoreAttorney> {
    vec![
        attorney("U1", AttorneyStatus::Active, AppointmentType::Original),
        attorney("U2", AttorneyStatus::Active, AppointmentType::Replacement),
        attorney("U3", AttorneyStatus::Inactive, AppointmentType::Replacement),
        attorney("U4", AttorneyStatus::Inactive, AppointmentType::Replacement),
        attorney("U5", AttorneyStatus::Removed, AppointmentType::Original),
    ]
}

pub(crate) fn case_summary(decisions: DecisionMode) -> CaseSummary {
    CaseSummary {
        digital_lpa: DigitalLpa {
            uid: CASE_UID.to_string(),
            sirius_data: SiriusData {
                id: 42,
                uid: CASE_UID.to_string(),
                subtype: "personal-welfare".to_string(),
                status: "Registered".to_string(),
            },
            lpa_store_data: LpaStoreData {
                attorneys: scenario_attorneys(),
                how_attorneys_make_decisions: decisions,
                how_replacement_attorneys_make_decisions: DecisionMode::Unspecified,
            },
        },
        task_list: Vec::new(),
        warning_list: Vec::new(),
    }
}

pub(crate) fn reason(handle: &str, sub_types: &[&str]) -> RefDataItem {
    RefDataItem {
        handle: handle.to_string(),
        label: handle.to_lowercase(),
        valid_sub_types: sub_types.iter().map(|s| s.to_string()).collect(),
    }
}

pub(crate) fn removed_reasons() -> Vec<RefDataItem> {
    vec![
        reason("health", &[]),
        reason("DECEASED", &["personal-welfare", "property-and-affairs"]),
        reason("BANKRUPT", &["property-and-affairs"]),
    ]
}

pub(crate) fn removal(step: WizardStep, form: RemovalForm) -> RemovalSubmission {
    RemovalSubmission { form, step }
}

/// U1 removed for ill health, U3 stepping in.
pub(crate) fn scenario_form() -> RemovalForm {
    RemovalForm {
        removed_attorney_uid: "U1".to_string(),
        removed_reason: "health".to_string(),
        enabled_attorney_uids: vec!["U3".to_string()],
        ..RemovalForm::default()
    }
}

pub(crate) fn ctx() -> Context {
    Context {
        cookie_header: Some("sirius=session".to_string()),
        xsrf_token: "xsrf-abc".to_string(),
    }
}

/// Write recorded by [`MemorySirius`], in call order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SiriusCall {
    Status {
        case_uid: String,
        statuses: Vec<AttorneyUpdatedStatus>,
    },
    Decisions {
        case_uid: String,
        decisions: Vec<AttorneyDecision>,
    },
}

#[derive(Default)]
pub(crate) struct MemorySirius {
    pub(crate) summary: CaseSummary,
    pub(crate) reasons: Vec<RefDataItem>,
    pub(crate) missing_case: bool,
    pub(crate) reject_status: Option<ValidationError>,
    pub(crate) reject_decisions: Option<ValidationError>,
    pub(crate) fail_decisions_with: Option<u16>,
    calls: Mutex<Vec<SiriusCall>>,
    contexts: Mutex<Vec<Context>>,
}

impl MemorySirius {
    pub(crate) fn new(decisions: DecisionMode) -> Self {
        Self {
            summary: case_summary(decisions),
            reasons: removed_reasons(),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<SiriusCall> {
        self.calls.lock().expect("call log mutex poisoned").clone()
    }

    pub(crate) fn contexts(&self) -> Vec<Context> {
        self.contexts.lock().expect("context mutex poisoned").clone()
    }

    fn record_context(&self, ctx: &Context) {
        self.contexts
            .lock()
            .expect("context mutex poisoned")
            .push(ctx.clone());
    }

    fn record(&self, call: SiriusCall) {
        self.calls.lock().expect("call log mutex poisoned").push(call);
    }
}

fn status_error(code: u16, method: &str, path: &str) -> SiriusError {
    SiriusError::Status(StatusError {
        code,
        method: method.to_string(),
        url: format!("http://sirius{path}"),
        correlation_id: Some("corr-1".to_string()),
    })
}

#[async_trait]
impl CaseSummaryClient for MemorySirius {
    async fn case_summary(&self, ctx: &Context, uid: &str) -> Result<CaseSummary, SiriusError> {
        self.record_context(ctx);
        if self.missing_case || uid != self.summary.digital_lpa.uid {
            return Err(status_error(
                404,
                "GET",
                &format!("/lpa-api/v1/digital-lpas/{uid}"),
            ));
        }
        Ok(self.summary.clone())
    }
}

#[async_trait]
impl RefDataClient for MemorySirius {
    async fn ref_data_by_category(
        &self,
        ctx: &Context,
        _category: &str,
    ) -> Result<Vec<RefDataItem>, SiriusError> {
        self.record_context(ctx);
        Ok(self.reasons.clone())
    }
}

#[async_trait]
impl AttorneyStatusClient for MemorySirius {
    async fn change_attorney_status(
        &self,
        ctx: &Context,
        case_uid: &str,
        statuses: &[AttorneyUpdatedStatus],
    ) -> Result<(), SiriusError> {
        self.record_context(ctx);
        if let Some(rejection) = &self.reject_status {
            return Err(rejection.clone().into());
        }
        self.record(SiriusCall::Status {
            case_uid: case_uid.to_string(),
            statuses: statuses.to_vec(),
        });
        Ok(())
    }
}

#[async_trait]
impl AttorneyDecisionsClient for MemorySirius {
    async fn manage_attorney_decisions(
        &self,
        ctx: &Context,
        case_uid: &str,
        decisions: &[AttorneyDecision],
    ) -> Result<(), SiriusError> {
        self.record_context(ctx);
        if let Some(rejection) = &self.reject_decisions {
            return Err(rejection.clone().into());
        }
        if let Some(code) = self.fail_decisions_with {
            return Err(status_error(
                code,
                "PUT",
                &format!("/lpa-api/v1/digital-lpas/{case_uid}/attorney-decisions"),
            ));
        }
        self.record(SiriusCall::Decisions {
            case_uid: case_uid.to_string(),
            decisions: decisions.to_vec(),
        });
        Ok(())
    }
}

pub(crate) fn rejection(field: &str, message: &str) -> ValidationError {
    let mut error = ValidationError {
        detail: "Payload failed validation".to_string(),
        ..ValidationError::default()
    };
    error.insert(field, message);
    error
}

pub(crate) fn settings() -> WebSettings {
    WebSettings {
        prefix: "/lpa-frontend".to_string(),
        secure_cookies: true,
    }
}

pub(crate) fn router_with_client(client: Arc<MemorySirius>) -> axum::Router {
    let pages = AttorneyPages::new(client, Arc::new(JsonRenderer), settings());
    attorney_router(Arc::new(pages))
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
