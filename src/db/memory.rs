use crate::auth::permissions::Role;
use crate::db::store::QrStore;
use crate::qr::model::QrCode;
use async_trait::async_trait;
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Process-local store, for development servers and tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    qrs: RwLock<HashMap<String, QrCode>>,
    roles: RwLock<HashMap<(String, String), Role>>,
    assets: RwLock<HashSet<(String, String)>>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub async fn insert_qr(&self, qr: QrCode) {
        self.qrs.write().await.insert(qr.id.clone(), qr);
    }

    pub async fn insert_role(&self, account_id: &str, organization_id: &str, role: Role) {
        self.roles.write().await.insert(
            (account_id.to_string(), organization_id.to_string()),
            role,
        );
    }

    pub async fn insert_asset(&self, asset_id: &str, organization_id: &str) {
        self.assets
            .write()
            .await
            .insert((asset_id.to_string(), organization_id.to_string()));
    }

    /// Makes every subsequent operation fail like an unreachable datastore.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err("Store unavailable").handle_err(location!());
        }
        Ok(())
    }
}

#[async_trait]
impl QrStore for InMemoryStore {
    async fn find_qr(&self, qr_id: &str, organization_id: &str) -> Result<Option<QrCode>, Error> {
        self.check_available()?;
        Ok(self
            .qrs
            .read()
            .await
            .get(qr_id)
            .filter(|qr| qr.organization_id == organization_id)
            .cloned())
    }

    async fn find_role(
        &self,
        account_id: &str,
        organization_id: &str,
    ) -> Result<Option<Role>, Error> {
        self.check_available()?;
        Ok(self
            .roles
            .read()
            .await
            .get(&(account_id.to_string(), organization_id.to_string()))
            .copied())
    }

    async fn asset_exists(&self, asset_id: &str, organization_id: &str) -> Result<bool, Error> {
        self.check_available()?;
        Ok(self
            .assets
            .read()
            .await
            .contains(&(asset_id.to_string(), organization_id.to_string())))
    }

    async fn link_asset(
        &self,
        qr_id: &str,
        organization_id: &str,
        asset_id: &str,
    ) -> Result<bool, Error> {
        self.check_available()?;
        let mut qrs = self.qrs.write().await;
        let Some(qr) = qrs
            .get_mut(qr_id)
            .filter(|qr| qr.organization_id == organization_id)
        else {
            return Ok(false);
        };
        if qr.link_state().is_linked() {
            return Ok(false);
        }
        qr.link(asset_id)?;
        Ok(true)
    }
}
