use crate::error::Rejection;
use crate::helpers::authenticate;

/// Caller identity for a single request, decoded from its bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub account_id: String,
    pub organization_id: String,
}

impl Session {
    pub fn new(
        token: impl Into<String>,
        account_id: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            account_id: account_id.into(),
            organization_id: organization_id.into(),
        }
    }

    pub fn from_jwt(jwt: String) -> Result<Self, Rejection> {
        let Ok((token, token_info)) = authenticate(jwt) else {
            return Err(Rejection::unauthorized("Invalid token"));
        };

        if token_info.is_expired() {
            return Err(Rejection::unauthorized("Token expired"));
        }

        let account = token_info.account;
        if account.organization_id.is_empty() {
            return Err(Rejection::unauthorized("Token carries no organization"));
        }

        Ok(Self {
            token,
            account_id: account.account_id,
            organization_id: account.organization_id,
        })
    }
}
