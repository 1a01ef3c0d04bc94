use nullnet_libtoken::Token;
use std::sync::Arc;

#[derive(Debug)]
pub(super) struct AuthData {
    pub(super) account_id: String,
    pub(super) account_secret: String,
    pub(super) is_root: bool,
    pub(super) token: Option<Arc<Token>>,
}

impl AuthData {
    pub(super) fn new(
        account_id: impl Into<String>,
        account_secret: impl Into<String>,
        is_root: bool,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            account_secret: account_secret.into(),
            is_root,
            token: None,
        }
    }

    pub(super) fn valid_token(&self) -> Option<Arc<Token>> {
        self.token.as_ref().filter(|t| !t.is_expired()).cloned()
    }
}
