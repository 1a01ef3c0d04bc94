use crate::auth::permissions::Role;
use crate::qr::model::QrCode;
use async_trait::async_trait;
use nullnet_liberror::Error;

/// Persistence seam. Every lookup is filtered by organization.
#[async_trait]
pub trait QrStore: Send + Sync {
    /// `SELECT * FROM qrs WHERE id = {qr_id} AND organization_id = {organization_id}`
    async fn find_qr(&self, qr_id: &str, organization_id: &str) -> Result<Option<QrCode>, Error>;

    async fn find_role(&self, account_id: &str, organization_id: &str)
        -> Result<Option<Role>, Error>;

    async fn asset_exists(&self, asset_id: &str, organization_id: &str) -> Result<bool, Error>;

    /// Persists the `Unlinked -> Linked` transition of a QR code.
    ///
    /// The write only applies to a QR code that is still unlinked; `Ok(false)` means nothing
    /// was updated, because the QR code got linked in the meantime or is not in scope.
    async fn link_asset(
        &self,
        qr_id: &str,
        organization_id: &str,
        asset_id: &str,
    ) -> Result<bool, Error>;
}
