use super::common::*;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::sirius::{
    AttorneyDecision, AttorneyStatus, AttorneyUpdatedStatus, DecisionMode, SiriusError,
};
use crate::web::{FlashNotification, Template};
use crate::workflows::attorneys::{
    PageOutcome, RemovalForm, RemoveAttorneyView, RemoveAttorneyWizard, WizardStep,
};

fn wizard(client: &Arc<MemorySirius>) -> RemoveAttorneyWizard<MemorySirius> {
    RemoveAttorneyWizard::new(client.clone())
}

fn rendered(
    outcome: PageOutcome<RemoveAttorneyView>,
) -> (Template, StatusCode, RemoveAttorneyView) {
    match outcome {
        PageOutcome::Render {
            template,
            status,
            view,
        } => (template, status, view),
        other => panic!("expected a rendered page, got {other:?}"),
    }
}

fn uids(view_attorneys: &[crate::sirius::LpaStoreAttorney]) -> Vec<&str> {
    view_attorneys.iter().map(|a| a.uid.as_str()).collect()
}

#[tokio::test]
async fn show_renders_partition_without_writing() {
    let client = Arc::new(MemorySirius::new(DecisionMode::Jointly));

    let outcome = wizard(&client)
        .show(&ctx(), CASE_UID)
        .await
        .expect("page loads");
    let (template, status, view) = rendered(outcome);

    assert_eq!(template, Template::RemoveAttorney);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view.form_name, "remove");
    assert_eq!(uids(&view.active_attorneys), vec!["U1", "U2"]);
    assert_eq!(uids(&view.inactive_attorneys), vec!["U3", "U4"]);
    assert!(view.decision_attorneys.is_empty());
    assert_eq!(view.active_attorney_count, 2);
    assert_eq!(view.replacement_attorney_count, 2);
    assert_eq!(
        view.removed_reasons
            .iter()
            .map(|r| r.handle.as_str())
            .collect::<Vec<_>>(),
        vec!["health", "DECEASED"]
    );
    assert_eq!(view.replacement_attorney_decisions, DecisionMode::Jointly);
    assert_eq!(view.xsrf_token, "xsrf-abc");
    assert!(!view.errors.any());
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn remove_step_skips_decisions_when_lpa_does_not_need_them() {
    let client = Arc::new(MemorySirius::new(DecisionMode::Jointly));

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Remove, scenario_form()))
        .await
        .expect("submission handled");
    let (template, status, view) = rendered(outcome);

    assert_eq!(template, Template::ConfirmRemoval);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view.step, WizardStep::Confirm);

    let removed = view.removed_attorney_details.expect("removed attorney summarised");
    assert_eq!(removed.name, "U1 First Attorney");
    assert_eq!(removed.date_of_birth, "31/01/1980");
    assert_eq!(
        view.enabled_attorney_details
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>(),
        vec!["U3 First Attorney"]
    );
    assert_eq!(
        view.removed_reason.map(|r| r.handle),
        Some("health".to_string())
    );
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn remove_step_advances_to_decisions_for_mixed_mode_lpa() {
    let client = Arc::new(MemorySirius::new(
        DecisionMode::JointlyForSomeSeverallyForOthers,
    ));

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Remove, scenario_form()))
        .await
        .expect("submission handled");
    let (template, status, view) = rendered(outcome);

    assert_eq!(template, Template::DecisionAttorney);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view.step, WizardStep::Decision);
    assert_eq!(uids(&view.decision_attorneys), vec!["U2", "U3"]);
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn decision_step_without_choice_rerenders_decisions() {
    let client = Arc::new(MemorySirius::new(
        DecisionMode::JointlyForSomeSeverallyForOthers,
    ));

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Decision, scenario_form()))
        .await
        .expect("submission handled");
    let (template, status, view) = rendered(outcome);

    assert_eq!(template, Template::DecisionAttorney);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        view.errors.reason("decisionAttorney"),
        Some("Select who cannot make joint decisions, or select 'Joint decisions can be made by all attorneys'")
    );
    assert_eq!(uids(&view.decision_attorneys), vec!["U2", "U3"]);
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn decision_step_with_choice_renders_confirmation() {
    let client = Arc::new(MemorySirius::new(
        DecisionMode::JointlyForSomeSeverallyForOthers,
    ));
    let form = RemovalForm {
        decision_attorney_uids: vec!["U3".to_string()],
        ..scenario_form()
    };

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Decision, form))
        .await
        .expect("submission handled");
    let (template, status, view) = rendered(outcome);

    assert_eq!(template, Template::ConfirmRemoval);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        view.decision_attorney_details
            .iter()
            .map(|d| (d.name.as_str(), d.appointment_type.as_str()))
            .collect::<Vec<_>>(),
        vec![("U3 First Attorney", "replacement")]
    );
}

#[tokio::test]
async fn decision_step_on_other_modes_goes_straight_to_confirmation() {
    let client = Arc::new(MemorySirius::new(DecisionMode::JointlyAndSeverally));

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Decision, scenario_form()))
        .await
        .expect("submission handled");
    let (template, status, view) = rendered(outcome);

    assert_eq!(template, Template::ConfirmRemoval);
    assert_eq!(status, StatusCode::OK);
    assert!(!view.errors.any());
}

#[tokio::test]
async fn confirm_step_commits_status_then_decisions() {
    let client = Arc::new(MemorySirius::new(
        DecisionMode::JointlyForSomeSeverallyForOthers,
    ));
    let form = RemovalForm {
        decision_attorney_uids: vec!["U2".to_string()],
        ..scenario_form()
    };

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Confirm, form))
        .await
        .expect("submission handled");

    assert_eq!(
        outcome,
        PageOutcome::Redirect {
            location: format!("/lpa/{CASE_UID}"),
            flash: Some(FlashNotification::new("Update saved")),
        }
    );
    assert_eq!(
        client.calls(),
        vec![
            SiriusCall::Status {
                case_uid: CASE_UID.to_string(),
                statuses: vec![
                    AttorneyUpdatedStatus {
                        uid: "U1".to_string(),
                        status: AttorneyStatus::Removed,
                        removed_reason: Some("health".to_string()),
                    },
                    AttorneyUpdatedStatus {
                        uid: "U3".to_string(),
                        status: AttorneyStatus::Active,
                        removed_reason: None,
                    },
                ],
            },
            SiriusCall::Decisions {
                case_uid: CASE_UID.to_string(),
                decisions: vec![
                    AttorneyDecision {
                        uid: "U2".to_string(),
                        cannot_make_joint_decisions: true,
                    },
                    AttorneyDecision {
                        uid: "U3".to_string(),
                        cannot_make_joint_decisions: false,
                    },
                    AttorneyDecision {
                        uid: "U1".to_string(),
                        cannot_make_joint_decisions: false,
                    },
                ],
            },
        ]
    );
    assert!(client.contexts().iter().all(|c| c.xsrf_token == "xsrf-abc"));
}

#[tokio::test]
async fn confirm_step_only_updates_statuses_for_single_mode_lpa() {
    let client = Arc::new(MemorySirius::new(DecisionMode::Jointly));

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Confirm, scenario_form()))
        .await
        .expect("submission handled");

    assert!(matches!(outcome, PageOutcome::Redirect { .. }));
    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], SiriusCall::Status { .. }));
}

#[tokio::test]
async fn empty_submission_reports_all_required_fields() {
    let client = Arc::new(MemorySirius::new(DecisionMode::Jointly));

    let outcome = wizard(&client)
        .submit(
            &ctx(),
            CASE_UID,
            removal(WizardStep::Remove, RemovalForm::default()),
        )
        .await
        .expect("submission handled");
    let (template, status, view) = rendered(outcome);

    assert_eq!(template, Template::RemoveAttorney);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    for field in ["removeAttorney", "removedReason", "enableAttorney"] {
        assert!(view.errors.reason(field).is_some(), "{field} missing");
    }
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn invalid_confirm_submission_never_writes() {
    let client = Arc::new(MemorySirius::new(DecisionMode::Jointly));
    let form = RemovalForm {
        skip_enable_attorney: true,
        ..scenario_form()
    };

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Confirm, form))
        .await
        .expect("submission handled");
    let (template, status, view) = rendered(outcome);

    assert_eq!(template, Template::ConfirmRemoval);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        view.errors.reason("enableAttorney"),
        Some("Please do not select both a replacement attorney and the option to skip")
    );
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn removing_a_dormant_attorney_is_rejected() {
    let client = Arc::new(MemorySirius::new(DecisionMode::Jointly));
    let form = RemovalForm {
        removed_attorney_uid: "U4".to_string(),
        removed_reason: "BANKRUPT".to_string(),
        ..scenario_form()
    };

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Remove, form))
        .await
        .expect("submission handled");
    let (_, status, view) = rendered(outcome);

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(view.errors.reason("removeAttorney").is_some());
    assert_eq!(
        view.errors.reason("removedReason"),
        Some("Please select a valid reason for removal")
    );
}

#[tokio::test]
async fn upstream_validation_failure_is_shown_on_confirmation() {
    let mut memory = MemorySirius::new(DecisionMode::JointlyForSomeSeverallyForOthers);
    memory.reject_status = Some(rejection("removedReason", "Value is not allowed"));
    let client = Arc::new(memory);
    let form = RemovalForm {
        skip_decision_attorney: true,
        ..scenario_form()
    };

    let outcome = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Confirm, form))
        .await
        .expect("validation failures are not errors");
    let (template, status, view) = rendered(outcome);

    assert_eq!(template, Template::ConfirmRemoval);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(view.errors.detail, "Payload failed validation");
    assert_eq!(view.errors.reason("removedReason"), Some("Value is not allowed"));
    assert!(client.calls().is_empty(), "decision batch must not be sent");
}

#[tokio::test]
async fn decision_failure_keeps_status_changes_and_propagates() {
    let mut memory = MemorySirius::new(DecisionMode::JointlyForSomeSeverallyForOthers);
    memory.fail_decisions_with = Some(500);
    let client = Arc::new(memory);
    let form = RemovalForm {
        skip_decision_attorney: true,
        ..scenario_form()
    };

    let result = wizard(&client)
        .submit(&ctx(), CASE_UID, removal(WizardStep::Confirm, form))
        .await;

    match result {
        Err(SiriusError::Status(status)) => assert_eq!(status.code, 500),
        other => panic!("expected upstream status error, got {other:?}"),
    }
    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], SiriusCall::Status { .. }));
}

#[tokio::test]
async fn missing_case_propagates() {
    let mut memory = MemorySirius::new(DecisionMode::Jointly);
    memory.missing_case = true;
    let client = Arc::new(memory);

    let result = wizard(&client).show(&ctx(), CASE_UID).await;
    assert!(matches!(result, Err(SiriusError::Status(ref status)) if status.is_not_found()));
}
