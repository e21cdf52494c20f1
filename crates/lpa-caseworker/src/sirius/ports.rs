use async_trait::async_trait;

use super::error::SiriusError;
use super::model::{AttorneyDecision, AttorneyUpdatedStatus, CaseSummary, RefDataItem};
use super::Context;

/// Reference data category listing the reasons an attorney can be removed.
pub const ATTORNEY_REMOVED_REASON_CATEGORY: &str = "attorneyRemovedReason";

#[async_trait]
pub trait CaseSummaryClient: Send + Sync {
    async fn case_summary(&self, ctx: &Context, uid: &str) -> Result<CaseSummary, SiriusError>;
}

#[async_trait]
pub trait RefDataClient: Send + Sync {
    async fn ref_data_by_category(
        &self,
        ctx: &Context,
        category: &str,
    ) -> Result<Vec<RefDataItem>, SiriusError>;
}

#[async_trait]
pub trait AttorneyStatusClient: Send + Sync {
    async fn change_attorney_status(
        &self,
        ctx: &Context,
        case_uid: &str,
        statuses: &[AttorneyUpdatedStatus],
    ) -> Result<(), SiriusError>;
}

#[async_trait]
pub trait AttorneyDecisionsClient: Send + Sync {
    async fn manage_attorney_decisions(
        &self,
        ctx: &Context,
        case_uid: &str,
        decisions: &[AttorneyDecision],
    ) -> Result<(), SiriusError>;
}

/// Everything the remove-an-attorney wizard talks to.
pub trait RemoveAttorneyClient:
    CaseSummaryClient + RefDataClient + AttorneyStatusClient + AttorneyDecisionsClient
{
}

impl<T> RemoveAttorneyClient for T where
    T: CaseSummaryClient + RefDataClient + AttorneyStatusClient + AttorneyDecisionsClient
{
}
