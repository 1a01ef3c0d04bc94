use crate::auth::permissions::Role;
use crate::db::datastore_wrapper::DatastoreWrapper;
use crate::db::store::QrStore;
use crate::qr::model::QrCode;
use crate::token_provider::TokenProvider;
use async_trait::async_trait;
use nullnet_liberror::Error;

/// `QrStore` backed by the remote datastore, authenticated as a service account.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    datastore: DatastoreWrapper,
    token_provider: TokenProvider,
}

impl RemoteStore {
    pub fn new(datastore: DatastoreWrapper, token_provider: TokenProvider) -> Self {
        Self {
            datastore,
            token_provider,
        }
    }

    async fn token(&self) -> Result<String, Error> {
        Ok(self.token_provider.get().await?.jwt.clone())
    }
}

#[async_trait]
impl QrStore for RemoteStore {
    async fn find_qr(&self, qr_id: &str, organization_id: &str) -> Result<Option<QrCode>, Error> {
        let token = self.token().await?;
        self.datastore.get_qr(&token, qr_id, organization_id).await
    }

    async fn find_role(
        &self,
        account_id: &str,
        organization_id: &str,
    ) -> Result<Option<Role>, Error> {
        let token = self.token().await?;
        self.datastore
            .get_role(&token, account_id, organization_id)
            .await
    }

    async fn asset_exists(&self, asset_id: &str, organization_id: &str) -> Result<bool, Error> {
        let token = self.token().await?;
        self.datastore
            .asset_exists(&token, asset_id, organization_id)
            .await
    }

    async fn link_asset(
        &self,
        qr_id: &str,
        organization_id: &str,
        asset_id: &str,
    ) -> Result<bool, Error> {
        let token = self.token().await?;
        self.datastore
            .link_asset(&token, qr_id, organization_id, asset_id)
            .await
    }
}
