use std::sync::Arc;

use actix_web::http::StatusCode;
use async_trait::async_trait;
use nullnet_liberror::Error;

use qr_link_server::app_context::AppContext;
use qr_link_server::auth::permissions::Role;
use qr_link_server::config::Config;
use qr_link_server::db::memory::InMemoryStore;
use qr_link_server::db::store::QrStore;
use qr_link_server::http_server::api::{link_page, link_qr_to_asset, qr_page};
use qr_link_server::http_server::responses::error_response;
use qr_link_server::qr::model::QrCode;

use crate::helpers::{
    context_setup, location, session, store_setup, ADMIN_A, ADMIN_B, BASE_A, ORG_A, ORG_B,
    SELF_SERVICE_A,
};

#[tokio::test]
async fn test_link_existing_asset_links_and_redirects() {
    let store = store_setup().await;
    let context = context_setup(store.clone());

    let response = link_qr_to_asset(
        &context,
        &session(SELF_SERVICE_A, ORG_A),
        "qr-3".to_string(),
        "asset-10",
    )
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/qr/qr-3");

    assert_eq!(
        store.find_qr("qr-3", ORG_A).await.unwrap(),
        Some(QrCode::new("qr-3", ORG_A).with_asset("asset-10"))
    );

    // the link screen now sends the caller back to the canonical page, which shows the asset
    let response = link_page(&context, &session(ADMIN_A, ORG_A), "qr-3".to_string())
        .await
        .unwrap();
    assert_eq!(location(&response), "/qr/qr-3");
    let response = qr_page(&context, &session(ADMIN_A, ORG_A), "qr-3".to_string())
        .await
        .unwrap();
    assert_eq!(location(&response), "/assets/asset-10");
}

#[tokio::test]
async fn test_link_existing_asset_already_linked_is_conflict() {
    let store = store_setup().await;
    let context = context_setup(store.clone());

    let err = link_qr_to_asset(
        &context,
        &session(ADMIN_A, ORG_A),
        "qr-2".to_string(),
        "asset-10",
    )
    .await
    .unwrap_err();
    assert_eq!(error_response(err).status(), StatusCode::CONFLICT);
    assert_eq!(
        store.find_qr("qr-2", ORG_A).await.unwrap(),
        Some(QrCode::new("qr-2", ORG_A).with_asset("asset-9"))
    );
}

#[tokio::test]
async fn test_link_existing_asset_foreign_asset_is_not_found() {
    let store = store_setup().await;
    let context = context_setup(store.clone());

    let err = link_qr_to_asset(
        &context,
        &session(ADMIN_A, ORG_A),
        "qr-3".to_string(),
        "asset-b",
    )
    .await
    .unwrap_err();
    assert_eq!(error_response(err).status(), StatusCode::NOT_FOUND);
    assert_eq!(
        store.find_qr("qr-3", ORG_A).await.unwrap(),
        Some(QrCode::new("qr-3", ORG_A))
    );
}

#[tokio::test]
async fn test_link_existing_asset_foreign_qr_is_forbidden() {
    let context = context_setup(store_setup().await);

    let err = link_qr_to_asset(
        &context,
        &session(ADMIN_B, ORG_B),
        "qr-3".to_string(),
        "asset-b",
    )
    .await
    .unwrap_err();
    assert_eq!(error_response(err).status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_link_existing_asset_refusals() {
    let context = context_setup(store_setup().await);

    let err = link_qr_to_asset(&context, &session(BASE_A, ORG_A), "qr-3".to_string(), "asset-10")
        .await
        .unwrap_err();
    assert_eq!(error_response(err).status(), StatusCode::FORBIDDEN);

    let err = link_qr_to_asset(&context, &session(ADMIN_A, ORG_A), "qr-3".to_string(), "  ")
        .await
        .unwrap_err();
    assert_eq!(error_response(err).status(), StatusCode::BAD_REQUEST);
}

/// Lets another request link the QR code right after the asset check, before the write.
struct ConcurrentLinkStore {
    inner: Arc<InMemoryStore>,
    competing_asset: &'static str,
}

#[async_trait]
impl QrStore for ConcurrentLinkStore {
    async fn find_qr(&self, qr_id: &str, organization_id: &str) -> Result<Option<QrCode>, Error> {
        self.inner.find_qr(qr_id, organization_id).await
    }

    async fn find_role(
        &self,
        account_id: &str,
        organization_id: &str,
    ) -> Result<Option<Role>, Error> {
        self.inner.find_role(account_id, organization_id).await
    }

    async fn asset_exists(&self, asset_id: &str, organization_id: &str) -> Result<bool, Error> {
        self.inner
            .link_asset("qr-3", organization_id, self.competing_asset)
            .await?;
        self.inner.asset_exists(asset_id, organization_id).await
    }

    async fn link_asset(
        &self,
        qr_id: &str,
        organization_id: &str,
        asset_id: &str,
    ) -> Result<bool, Error> {
        self.inner.link_asset(qr_id, organization_id, asset_id).await
    }
}

#[tokio::test]
async fn test_link_existing_asset_lost_race_is_conflict() {
    let store = store_setup().await;
    let context = AppContext::with_store(
        Config::default(),
        Arc::new(ConcurrentLinkStore {
            inner: store.clone(),
            competing_asset: "asset-9",
        }),
    );

    let err = link_qr_to_asset(
        &context,
        &session(ADMIN_A, ORG_A),
        "qr-3".to_string(),
        "asset-10",
    )
    .await
    .unwrap_err();
    assert_eq!(error_response(err).status(), StatusCode::CONFLICT);

    // the first link wins
    assert_eq!(
        store.find_qr("qr-3", ORG_A).await.unwrap(),
        Some(QrCode::new("qr-3", ORG_A).with_asset("asset-9"))
    );
}

#[tokio::test]
async fn test_link_existing_asset_over_whitespace_asset_is_conflict() {
    let store = store_setup().await;
    store
        .insert_qr(QrCode::new("qr-5", ORG_A).with_asset(" "))
        .await;
    let context = context_setup(store.clone());

    let err = link_qr_to_asset(
        &context,
        &session(ADMIN_A, ORG_A),
        "qr-5".to_string(),
        "asset-10",
    )
    .await
    .unwrap_err();
    assert_eq!(error_response(err).status(), StatusCode::CONFLICT);
    assert_eq!(
        store.find_qr("qr-5", ORG_A).await.unwrap(),
        Some(QrCode::new("qr-5", ORG_A).with_asset(" "))
    );
}
