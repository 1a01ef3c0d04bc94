//! Paths handed to the presentation layer.

use crate::qr::model::QrId;
use serde::Serialize;

pub const CANCEL: &str = "/";

/// Canonical per-QR page; it re-resolves the link state on every visit.
pub fn qr_page(qr_id: &QrId) -> String {
    format!("/qr/{qr_id}")
}

pub fn link_page(qr_id: &QrId) -> String {
    format!("/qr/{qr_id}/link")
}

pub fn create_asset_and_link(qr_id: &QrId) -> String {
    format!("/assets/new?qrId={qr_id}")
}

pub fn link_existing_asset(qr_id: &QrId) -> String {
    format!("/qr/{qr_id}/link-existing-asset")
}

pub fn asset_page(asset_id: &str) -> String {
    format!("/assets/{asset_id}")
}

/// Destinations offered for an unlinked QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkOptions {
    pub create_asset: String,
    pub link_existing: String,
    pub cancel: String,
}

impl LinkOptions {
    pub fn for_qr(qr_id: &QrId) -> Self {
        Self {
            create_asset: create_asset_and_link(qr_id),
            link_existing: link_existing_asset(qr_id),
            cancel: CANCEL.to_string(),
        }
    }
}
