use std::sync::Arc;

use actix_web::http::header;
use actix_web::HttpResponse;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::json;

use qr_link_server::app_context::AppContext;
use qr_link_server::auth::permissions::Role;
use qr_link_server::auth::session::Session;
use qr_link_server::config::{Config, StoreKind};
use qr_link_server::db::memory::InMemoryStore;
use qr_link_server::qr::model::QrCode;

pub const ORG_A: &str = "org-A";
pub const ORG_B: &str = "org-B";

pub const ADMIN_A: &str = "admin-a";
pub const BASE_A: &str = "base-a";
pub const SELF_SERVICE_A: &str = "self-service-a";
pub const ADMIN_B: &str = "admin-b";

/// Store with the three QR codes of the reference scenarios plus a few members and assets:
/// - `qr-1`: org-A, unlinked
/// - `qr-2`: org-A, linked to `asset-9`
/// - `qr-3`: org-A, unlinked
pub async fn store_setup() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::default());

    store.insert_qr(QrCode::new("qr-1", ORG_A)).await;
    store
        .insert_qr(QrCode::new("qr-2", ORG_A).with_asset("asset-9"))
        .await;
    store.insert_qr(QrCode::new("qr-3", ORG_A)).await;

    store.insert_asset("asset-9", ORG_A).await;
    store.insert_asset("asset-10", ORG_A).await;
    store.insert_asset("asset-b", ORG_B).await;

    store.insert_role(ADMIN_A, ORG_A, Role::Admin).await;
    store.insert_role(BASE_A, ORG_A, Role::Base).await;
    store.insert_role(SELF_SERVICE_A, ORG_A, Role::SelfService).await;
    store.insert_role(ADMIN_B, ORG_B, Role::Admin).await;

    store
}

pub fn context_setup(store: Arc<InMemoryStore>) -> AppContext {
    let config = Config {
        store: StoreKind::Memory,
        ..Config::default()
    };
    AppContext::with_store(config, store)
}

pub fn session(account_id: &str, organization_id: &str) -> Session {
    Session::new("test-jwt", account_id, organization_id)
}

/// Unsigned JWT whose payload decodes into a `nullnet_libtoken::Token`.
pub fn jwt(account_id: &str, organization_id: &str, exp: u64) -> String {
    let payload = json!({
        "account": {
            "organization": {
                "id": organization_id,
                "name": "Test organization",
                "code": "OR000001",
                "categories": [],
                "status": "Active",
                "organization_id": organization_id,
                "parent_organization_id": null
            },
            "id": account_id,
            "account_id": account_id,
            "organization_id": organization_id,
            "account_organization_id": null,
            "account_status": "Active",
            "role_id": null
        },
        "iat": now(),
        "exp": exp
    });
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.signature")
}

pub fn now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
}

pub fn bearer(jwt: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {jwt}"))
}

pub fn location(response: &HttpResponse) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_json(response: HttpResponse) -> serde_json::Value {
    let bytes = actix_web::body::to_bytes(response.into_body())
        .await
        .unwrap_or_default();
    serde_json::from_slice(&bytes).unwrap()
}
