use crate::db::datastore_wrapper::DatastoreWrapper;
use data::AuthData;
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use nullnet_libtoken::Token;
use std::sync::Arc;
use tokio::sync::Mutex;

mod data;

/// Service account token used for datastore reads and writes, refreshed on expiry.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    datastore: DatastoreWrapper,
    data: Arc<Mutex<AuthData>>,
}

impl TokenProvider {
    pub fn new(
        account_id: impl Into<String>,
        account_secret: impl Into<String>,
        is_root: bool,
        datastore: DatastoreWrapper,
    ) -> Self {
        let data = AuthData::new(account_id, account_secret, is_root);
        Self {
            datastore,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn get(&self) -> Result<Arc<Token>, Error> {
        let mut lock = self.data.lock().await;

        if let Some(token) = lock.valid_token() {
            return Ok(token);
        }

        log::debug!("Refreshing datastore token for '{}'", lock.account_id);
        let jwt = self
            .datastore
            .login(
                lock.account_id.clone(),
                lock.account_secret.clone(),
                lock.is_root,
            )
            .await?;

        let token = Arc::new(Token::from_jwt(&jwt).handle_err(location!())?);
        lock.token = Some(token.clone());

        Ok(token)
    }
}
