//! Backend implementation of the session-scoped referral ports.
//!
//! Each store carries one user's access token so the backend's row-level
//! policies see the request as coming from that user.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use super::rows::{ContestRow, InsertReferralRow, ProfileCodeRow, ReferralRow};
use super::BackendClient;
use crate::domain::foundation::{AuthenticatedUser, DomainError, UserId};
use crate::domain::referral::{NewReferral, Referral, ReferralCode, ReferralContestStatus};
use crate::ports::{
    ReferralCodeGenerator, ReferralPorts, ReferralPortsProvider, ReferralRepository,
};

const GENERATE_CODE_RPC: &str = "generate_referral_code";

pub struct BackendReferralStore {
    client: BackendClient,
    access_token: Secret<String>,
}

impl BackendReferralStore {
    pub fn new(client: BackendClient, access_token: impl Into<String>) -> Self {
        Self {
            client,
            access_token: Secret::new(access_token.into()),
        }
    }

    fn bearer(&self) -> &str {
        self.access_token.expose_secret()
    }
}

pub(crate) fn referrals_by_referrer_path(referrer: &UserId) -> String {
    format!(
        "referrals?referrer_user_id=eq.{}&order=created_at.desc",
        referrer
    )
}

pub(crate) fn profile_code_path(user: &UserId) -> String {
    format!("profiles?id=eq.{}&select=referral_code", user)
}

pub(crate) fn contest_status_path(user: &UserId) -> String {
    format!("referral_contest_status?user_id=eq.{}", user)
}

#[async_trait]
impl ReferralRepository for BackendReferralStore {
    async fn insert(&self, referral: NewReferral) -> Result<Referral, DomainError> {
        let row: ReferralRow = self
            .client
            .insert("referrals", &InsertReferralRow::from(&referral), self.bearer())
            .await?;
        row.try_into()
    }

    async fn list_by_referrer(&self, referrer: &UserId) -> Result<Vec<Referral>, DomainError> {
        let rows: Vec<ReferralRow> = self
            .client
            .select(&referrals_by_referrer_path(referrer), self.bearer())
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Referral::try_from(row) {
                    Ok(referral) => Some(referral),
                    Err(e) => {
                        tracing::warn!(referral_id = %id, error = %e, "skipping unreadable referral row");
                        None
                    }
                }
            })
            .collect())
    }

    async fn find_code(&self, user: &UserId) -> Result<Option<ReferralCode>, DomainError> {
        let rows: Vec<ProfileCodeRow> = self
            .client
            .select(&profile_code_path(user), self.bearer())
            .await?;
        Ok(rows.into_iter().next().and_then(ProfileCodeRow::into_code))
    }

    async fn contest_status(
        &self,
        user: &UserId,
    ) -> Result<Option<ReferralContestStatus>, DomainError> {
        let rows: Vec<ContestRow> = self
            .client
            .select(&contest_status_path(user), self.bearer())
            .await?;
        Ok(rows.into_iter().next().map(ReferralContestStatus::from))
    }
}

#[async_trait]
impl ReferralCodeGenerator for BackendReferralStore {
    async fn generate(&self) -> Result<ReferralCode, DomainError> {
        let code: String = self.client.rpc(GENERATE_CODE_RPC, self.bearer()).await?;
        Ok(ReferralCode::new(code)?)
    }
}

/// Hands out stores bound to the requesting user's token.
#[derive(Debug, Clone)]
pub struct BackendReferralPorts {
    client: BackendClient,
}

impl BackendReferralPorts {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl ReferralPortsProvider for BackendReferralPorts {
    fn for_user(&self, user: &AuthenticatedUser) -> ReferralPorts {
        let store = Arc::new(BackendReferralStore::new(
            self.client.clone(),
            user.access_token(),
        ));
        ReferralPorts {
            repository: store.clone(),
            code_generator: store,
        }
    }
}
