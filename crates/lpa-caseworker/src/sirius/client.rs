use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::error::{SiriusError, StatusError, ValidationError};
use super::model::{
    AttorneyDecision, AttorneyUpdatedStatus, CaseSummary, DigitalLpa, RefDataItem, Task, Warning,
};
use super::ports::{AttorneyDecisionsClient, AttorneyStatusClient, CaseSummaryClient, RefDataClient};
use super::Context;
use crate::config::SiriusConfig;

const BYPASS_MEMBRANE_HEADER: &str = "OPG-Bypass-Membrane";
const XSRF_HEADER: &str = "X-XSRF-TOKEN";
const CORRELATION_ID_HEADER: &str = "Correlation-Id";

/// HTTP implementation of every Sirius capability used by the frontend.
#[derive(Debug, Clone)]
pub struct SiriusClient {
    http: reqwest::Client,
    base_url: Url,
}

#[derive(Deserialize)]
struct TaskList {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AttorneyStatusRequest<'a> {
    attorney_statuses: &'a [AttorneyUpdatedStatus],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AttorneyDecisionsRequest<'a> {
    attorney_decisions: &'a [AttorneyDecision],
}

impl SiriusClient {
    pub fn new(config: &SiriusConfig) -> Result<Self, SiriusError> {
        if config.base_url.cannot_be_a_base() {
            return Err(SiriusError::InvalidBaseUrl(config.base_url.to_string()));
        }
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_http(http, config.base_url.clone()))
    }

    pub fn with_http(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SiriusError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SiriusError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, ctx: &Context, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header(BYPASS_MEMBRANE_HEADER, "1")
            .header(XSRF_HEADER, ctx.xsrf_token.as_str());

        match &ctx.cookie_header {
            Some(cookies) => builder.header(COOKIE, cookies.as_str()),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, ctx: &Context, url: Url) -> Result<T, SiriusError> {
        debug!(%url, "sirius GET");
        let response = self.request(ctx, Method::GET, url.clone()).send().await?;

        if response.status() != StatusCode::OK {
            return Err(status_error(&Method::GET, &response).into());
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| SiriusError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn put_json<B>(&self, ctx: &Context, url: Url, body: &B) -> Result<(), SiriusError>
    where
        B: Serialize + Sync + ?Sized,
    {
        debug!(%url, "sirius PUT");
        let response = self
            .request(ctx, Method::PUT, url.clone())
            .json(body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            StatusCode::BAD_REQUEST => {
                let body = response.bytes().await?;
                let validation: ValidationError =
                    serde_json::from_slice(&body).map_err(|source| SiriusError::Decode {
                        url: url.to_string(),
                        source,
                    })?;
                Err(validation.into())
            }
            _ => Err(status_error(&Method::PUT, &response).into()),
        }
    }

    pub async fn digital_lpa(&self, ctx: &Context, uid: &str) -> Result<DigitalLpa, SiriusError> {
        let url = self.endpoint(&["lpa-api", "v1", "digital-lpas", uid])?;
        self.get_json(ctx, url).await
    }

    pub async fn tasks_for_case(&self, ctx: &Context, case_id: i64) -> Result<Vec<Task>, SiriusError> {
        let mut url = self.endpoint(&["lpa-api", "v1", "cases", &case_id.to_string(), "tasks"])?;
        url.query_pairs_mut()
            .append_pair("filter", "status:Not started,active:true")
            .append_pair("limit", "99")
            .append_pair("sort", "duedate:ASC");
        let list: TaskList = self.get_json(ctx, url).await?;
        Ok(list.tasks)
    }

    pub async fn warnings_for_case(
        &self,
        ctx: &Context,
        case_id: i64,
    ) -> Result<Vec<Warning>, SiriusError> {
        let mut url =
            self.endpoint(&["lpa-api", "v1", "cases", &case_id.to_string(), "warnings"])?;
        url.query_pairs_mut().append_pair("sort", "dateadded:DESC");
        self.get_json(ctx, url).await
    }
}

fn status_error(method: &Method, response: &Response) -> StatusError {
    StatusError {
        code: response.status().as_u16(),
        method: method.to_string(),
        url: response.url().to_string(),
        correlation_id: response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    }
}

#[async_trait]
impl CaseSummaryClient for SiriusClient {
    /// Loads the LPA first, then its tasks and warnings side by side.
    async fn case_summary(&self, ctx: &Context, uid: &str) -> Result<CaseSummary, SiriusError> {
        let digital_lpa = self.digital_lpa(ctx, uid).await?;
        let case_id = digital_lpa.sirius_data.id;

        let (task_list, warning_list) = tokio::try_join!(
            self.tasks_for_case(ctx, case_id),
            self.warnings_for_case(ctx, case_id)
        )?;

        Ok(CaseSummary {
            digital_lpa,
            task_list,
            warning_list,
        })
    }
}

#[async_trait]
impl RefDataClient for SiriusClient {
    async fn ref_data_by_category(
        &self,
        ctx: &Context,
        category: &str,
    ) -> Result<Vec<RefDataItem>, SiriusError> {
        let url = self.endpoint(&["lpa-api", "v1", "reference-data", category])?;
        self.get_json(ctx, url).await
    }
}

#[async_trait]
impl AttorneyStatusClient for SiriusClient {
    async fn change_attorney_status(
        &self,
        ctx: &Context,
        case_uid: &str,
        statuses: &[AttorneyUpdatedStatus],
    ) -> Result<(), SiriusError> {
        let url = self.endpoint(&["lpa-api", "v1", "digital-lpas", case_uid, "attorney-status"])?;
        let body = AttorneyStatusRequest {
            attorney_statuses: statuses,
        };
        self.put_json(ctx, url, &body).await
    }
}

#[async_trait]
impl AttorneyDecisionsClient for SiriusClient {
    async fn manage_attorney_decisions(
        &self,
        ctx: &Context,
        case_uid: &str,
        decisions: &[AttorneyDecision],
    ) -> Result<(), SiriusError> {
        let url =
            self.endpoint(&["lpa-api", "v1", "digital-lpas", case_uid, "attorney-decisions"])?;
        let body = AttorneyDecisionsRequest {
            attorney_decisions: decisions,
        };
        self.put_json(ctx, url, &body).await
    }
}
