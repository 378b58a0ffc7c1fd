//! # KYC Store
//!
//! Admin review queue plus mobile document submission.
//!
//! Reviewing replaces the request in place with the server's copy, so the row
//! picks up `reviewed_at`, `reviewer_id` and the rejection reason without a
//! refetch.

use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{KycFilters, KycRequest, KycStatus, Sort, SubmitKycRequest};

use super::list::{Keyed, ListStore};
use crate::core::error::Result;
use crate::core::service::{KycApi, ListSource};

impl Keyed for KycRequest {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct KycStore {
    list: ListStore<KycRequest, KycFilters>,
    api: Arc<dyn KycApi>,
    /// Latest submission made from this client.
    submitted: Arc<RwLock<Option<KycRequest>>>,
}

impl KycStore {
    pub fn new(source: Arc<dyn ListSource<KycRequest, KycFilters>>, api: Arc<dyn KycApi>) -> Self {
        Self {
            list: ListStore::new("kyc", source, Sort::desc("submittedAt")),
            api,
            submitted: Arc::new(RwLock::new(None)),
        }
    }

    /// Show only requests awaiting a decision.
    pub fn show_pending(&self) {
        self.list.update_filters(|filters| filters.status = Some(KycStatus::Pending));
    }

    pub async fn approve(&self, id: &str) -> Result<KycRequest> {
        let reviewed = self.list.apply(self.api.approve_kyc(id)).await?;
        tracing::info!(request_id = %reviewed.id, user_id = %reviewed.user_id, "KYC request approved");
        Ok(reviewed)
    }

    /// Reject with a reason that is shown to the user.
    pub async fn reject(&self, id: &str, reason: &str) -> Result<KycRequest> {
        let reviewed = self.list.apply(self.api.reject_kyc(id, reason)).await?;
        tracing::info!(request_id = %reviewed.id, user_id = %reviewed.user_id, "KYC request rejected");
        Ok(reviewed)
    }

    /// Mobile: upload identity documents for review.
    pub async fn submit(&self, request: &SubmitKycRequest) -> Result<KycRequest> {
        let created = self.list.track(self.api.submit_kyc(request)).await?;
        *self.submitted.write() = Some(created.clone());
        Ok(created)
    }

    pub fn last_submission(&self) -> Option<KycRequest> {
        self.submitted.read().clone()
    }

}

impl Deref for KycStore {
    type Target = ListStore<KycRequest, KycFilters>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}
