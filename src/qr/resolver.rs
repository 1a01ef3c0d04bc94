use crate::db::store::QrStore;
use crate::error::Rejection;
use crate::qr::model::{QrCode, QrId};
use nullnet_liberror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Rejected(Rejection),
    AlreadyLinked { qr_id: QrId },
    Linkable { qr_id: QrId },
}

/// Classifies a QR code within an organization. Never mutates it.
pub struct QrLinkResolver<'a> {
    store: &'a dyn QrStore,
}

impl<'a> QrLinkResolver<'a> {
    pub fn new(store: &'a dyn QrStore) -> Self {
        Self { store }
    }

    /// Scoped point lookup: a QR code of another organization is reported as missing.
    pub async fn find(&self, qr_id: &QrId, organization_id: &str) -> Result<Option<QrCode>, Error> {
        self.store.find_qr(qr_id.as_str(), organization_id).await
    }

    pub async fn resolve(
        &self,
        qr_id: &QrId,
        organization_id: &str,
    ) -> Result<ResolutionOutcome, Error> {
        let outcome = match self.find(qr_id, organization_id).await? {
            None => ResolutionOutcome::Rejected(Rejection::not_in_organization()),
            Some(qr) if qr.link_state().is_linked() => ResolutionOutcome::AlreadyLinked {
                qr_id: qr_id.clone(),
            },
            Some(_) => ResolutionOutcome::Linkable {
                qr_id: qr_id.clone(),
            },
        };

        log::debug!("QR '{qr_id}' in organization '{organization_id}' resolved to {outcome:?}");
        Ok(outcome)
    }
}
