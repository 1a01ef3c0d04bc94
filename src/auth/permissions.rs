use crate::auth::session::Session;
use crate::db::store::QrStore;
use crate::error::{ApiError, Rejection};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionEntity {
    Qr,
    Asset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionAction {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for PermissionEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionEntity::Qr => f.write_str("QR codes"),
            PermissionEntity::Asset => f.write_str("assets"),
        }
    }
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionAction::Create => f.write_str("create"),
            PermissionAction::Read => f.write_str("read"),
            PermissionAction::Update => f.write_str("update"),
            PermissionAction::Delete => f.write_str("delete"),
        }
    }
}

/// Role of an account inside one organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "OWNER")]
    Owner,
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "SELF_SERVICE")]
    SelfService,
    #[serde(rename = "BASE")]
    Base,
}

impl Role {
    pub fn allows(self, entity: PermissionEntity, action: PermissionAction) -> bool {
        use PermissionAction::{Create, Read, Update};
        use PermissionEntity::{Asset, Qr};

        match self {
            Role::Owner | Role::Admin => true,
            Role::SelfService => matches!(
                (entity, action),
                (Qr, Read | Update) | (Asset, Read | Create)
            ),
            Role::Base => matches!((entity, action), (Qr | Asset, Read)),
        }
    }
}

/// Outcome of a passed permission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedScope {
    pub account_id: String,
    pub organization_id: String,
    pub role: Role,
}

pub async fn require_permission(
    store: &dyn QrStore,
    session: &Session,
    entity: PermissionEntity,
    action: PermissionAction,
) -> Result<AuthorizedScope, ApiError> {
    let Some(role) = store
        .find_role(&session.account_id, &session.organization_id)
        .await?
    else {
        log::warn!(
            "Account '{}' has no role in organization '{}'",
            session.account_id,
            session.organization_id
        );
        return Err(Rejection::forbidden("You are not a member of this organization").into());
    };

    if !role.allows(entity, action) {
        log::warn!(
            "Account '{}' ({role:?}) is not allowed to {action} {entity}",
            session.account_id
        );
        return Err(Rejection::forbidden(format!("You are not allowed to {action} {entity}")).into());
    }

    Ok(AuthorizedScope {
        account_id: session.account_id.clone(),
        organization_id: session.organization_id.clone(),
        role,
    })
}
