use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{
        header::{CONTENT_TYPE, LOCATION, SET_COOKIE},
        HeaderMap, StatusCode,
    },
    response::{AppendHeaders, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use super::form::FormDecoder;
use super::manage::{ManageAttorneysService, ManageDecisionsService};
use super::views::PageOutcome;
use super::wizard::RemoveAttorneyWizard;
use crate::error::AppError;
use crate::sirius::RemoveAttorneyClient;
use crate::web::{
    flash_cookie, sirius_context, take_flash, FormFields, Page, TemplateRenderer, WebSettings,
};

/// Handler state for every attorney page on a case.
pub struct AttorneyPages<C> {
    wizard: RemoveAttorneyWizard<C>,
    decisions: ManageDecisionsService<C>,
    attorneys: ManageAttorneysService<C>,
    decoder: FormDecoder,
    renderer: Arc<dyn TemplateRenderer>,
    settings: WebSettings,
}

impl<C> AttorneyPages<C>
where
    C: RemoveAttorneyClient + 'static,
{
    pub fn new(client: Arc<C>, renderer: Arc<dyn TemplateRenderer>, settings: WebSettings) -> Self {
        Self {
            wizard: RemoveAttorneyWizard::new(client.clone()),
            decisions: ManageDecisionsService::new(client.clone()),
            attorneys: ManageAttorneysService::new(client),
            decoder: FormDecoder::default(),
            renderer,
            settings,
        }
    }

    pub fn with_decoder(mut self, decoder: FormDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    fn respond<V: Serialize>(
        &self,
        headers: &HeaderMap,
        outcome: PageOutcome<V>,
    ) -> Result<Response, AppError> {
        match outcome {
            PageOutcome::Render {
                template,
                status,
                view,
            } => {
                let (flash, expired) = match take_flash(headers, self.settings.secure_cookies) {
                    Some((flash, expired)) => (flash, Some(expired)),
                    None => (None, None),
                };
                let page = Page::new(template, &view)?.with_flash(flash);
                let body = self.renderer.render(&page)?;
                let cookies = expired.map(|cookie| (SET_COOKIE, cookie));

                Ok((
                    status,
                    [(CONTENT_TYPE, self.renderer.content_type())],
                    AppendHeaders(cookies),
                    body,
                )
                    .into_response())
            }
            PageOutcome::Redirect { location, flash } => {
                let cookies = flash
                    .map(|flash| (SET_COOKIE, flash_cookie(&flash, self.settings.secure_cookies)));

                Ok((
                    StatusCode::FOUND,
                    [(LOCATION, format!("{}{}", self.settings.prefix, location))],
                    AppendHeaders(cookies),
                )
                    .into_response())
            }
        }
    }
}

/// Router builder for the remove-an-attorney wizard and its sibling attorney pages.
pub fn attorney_router<C>(pages: Arc<AttorneyPages<C>>) -> Router
where
    C: RemoveAttorneyClient + 'static,
{
    Router::new()
        .route(
            "/lpa/:uid/remove-an-attorney",
            get(show_remove_attorney::<C>).post(submit_remove_attorney::<C>),
        )
        .route(
            "/lpa/:uid/manage-attorney-decisions",
            get(show_manage_decisions::<C>).post(submit_manage_decisions::<C>),
        )
        .route(
            "/lpa/:uid/manage-attorneys",
            get(show_manage_attorneys::<C>).post(submit_manage_attorneys::<C>),
        )
        .with_state(pages)
}

pub(crate) async fn show_remove_attorney<C>(
    State(pages): State<Arc<AttorneyPages<C>>>,
    Path(uid): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    C: RemoveAttorneyClient + 'static,
{
    let ctx = sirius_context(&headers, None);
    let outcome = pages.wizard.show(&ctx, &uid).await?;
    pages.respond(&headers, outcome)
}

pub(crate) async fn submit_remove_attorney<C>(
    State(pages): State<Arc<AttorneyPages<C>>>,
    Path(uid): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError>
where
    C: RemoveAttorneyClient + 'static,
{
    let fields = FormFields::from_request(&headers, &body)?;
    let ctx = sirius_context(&headers, Some(&fields));
    let submission = pages.decoder.removal(&fields)?;
    let outcome = pages.wizard.submit(&ctx, &uid, submission).await?;
    pages.respond(&headers, outcome)
}

pub(crate) async fn show_manage_decisions<C>(
    State(pages): State<Arc<AttorneyPages<C>>>,
    Path(uid): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    C: RemoveAttorneyClient + 'static,
{
    let ctx = sirius_context(&headers, None);
    let outcome = pages.decisions.show(&ctx, &uid).await?;
    pages.respond(&headers, outcome)
}

pub(crate) async fn submit_manage_decisions<C>(
    State(pages): State<Arc<AttorneyPages<C>>>,
    Path(uid): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError>
where
    C: RemoveAttorneyClient + 'static,
{
    let fields = FormFields::from_request(&headers, &body)?;
    let ctx = sirius_context(&headers, Some(&fields));
    let form = pages.decoder.decisions(&fields)?;
    let outcome = pages.decisions.submit(&ctx, &uid, form).await?;
    pages.respond(&headers, outcome)
}

pub(crate) async fn show_manage_attorneys<C>(
    State(pages): State<Arc<AttorneyPages<C>>>,
    Path(uid): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    C: RemoveAttorneyClient + 'static,
{
    let ctx = sirius_context(&headers, None);
    let outcome = pages.attorneys.show(&ctx, &uid).await?;
    pages.respond(&headers, outcome)
}

pub(crate) async fn submit_manage_attorneys<C>(
    State(pages): State<Arc<AttorneyPages<C>>>,
    Path(uid): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError>
where
    C: RemoveAttorneyClient + 'static,
{
    let fields = FormFields::from_request(&headers, &body)?;
    let ctx = sirius_context(&headers, Some(&fields));
    let action = pages.decoder.attorney_action(&fields)?;
    let outcome = pages.attorneys.submit(&ctx, &uid, action).await?;
    pages.respond(&headers, outcome)
}
