use crate::config::{Config, StoreKind};
use crate::db::datastore_wrapper::DatastoreWrapper;
use crate::db::memory::InMemoryStore;
use crate::db::remote_store::RemoteStore;
use crate::db::store::QrStore;
use crate::token_provider::TokenProvider;
use nullnet_liberror::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn QrStore>,
}

impl AppContext {
    pub async fn new(config: Config) -> Result<Self, Error> {
        let store: Arc<dyn QrStore> = match config.store {
            StoreKind::Datastore => {
                let datastore = DatastoreWrapper::new().await?;
                log::info!("Connected to datastore");
                let token_provider = TokenProvider::new(
                    config.account_id.clone(),
                    config.account_secret.clone(),
                    true,
                    datastore.clone(),
                );
                Arc::new(RemoteStore::new(datastore, token_provider))
            }
            StoreKind::Memory => {
                log::warn!("Using an in-memory store: data will not survive a restart");
                Arc::new(InMemoryStore::default())
            }
        };

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn QrStore>) -> Self {
        Self { config, store }
    }
}
