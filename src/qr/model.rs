use crate::helpers::non_empty;
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a QR code as it appears in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QrId(String);

impl QrId {
    pub fn new(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("QR identifier must not be empty").handle_err(location!());
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCode {
    pub id: String,
    pub organization_id: String,
    #[serde(default)]
    pub asset_id: Option<String>,
}

impl QrCode {
    pub fn new(id: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            organization_id: organization_id.into(),
            asset_id: None,
        }
    }

    #[must_use]
    pub fn with_asset(mut self, asset_id: impl Into<String>) -> Self {
        self.asset_id = Some(asset_id.into());
        self
    }

    /// Any non-empty `asset_id` counts as linked; its value is not inspected.
    pub fn link_state(&self) -> LinkState {
        match self.asset_id.as_deref().filter(|asset_id| !asset_id.is_empty()) {
            Some(asset_id) => LinkState::Linked {
                asset_id: asset_id.to_string(),
            },
            None => LinkState::Unlinked,
        }
    }

    /// Applies the `Unlinked -> Linked` transition to this record.
    pub fn link(&mut self, asset_id: &str) -> Result<(), Error> {
        match self.link_state().link(asset_id)? {
            LinkState::Linked { asset_id } => self.asset_id = Some(asset_id),
            LinkState::Unlinked => {}
        }
        Ok(())
    }
}

/// Linking state of a QR code. The only transition is `Unlinked -> Linked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    Unlinked,
    Linked { asset_id: String },
}

impl LinkState {
    pub fn is_linked(&self) -> bool {
        matches!(self, LinkState::Linked { .. })
    }

    pub fn link(self, asset_id: &str) -> Result<LinkState, Error> {
        let Some(asset_id) = non_empty(Some(asset_id)) else {
            return Err("Asset identifier must not be empty").handle_err(location!());
        };
        match self {
            LinkState::Unlinked => Ok(LinkState::Linked {
                asset_id: asset_id.to_string(),
            }),
            LinkState::Linked { .. } => {
                Err("QR code is already linked to an asset").handle_err(location!())
            }
        }
    }
}
