use crate::app_context::AppContext;
use crate::auth::permissions::{require_permission, PermissionAction, PermissionEntity};
use crate::auth::session::Session;
use crate::error::{ApiError, Rejection};
use crate::helpers::non_empty;
use crate::http_server::authorization::session_from_request;
use crate::http_server::responses::{redirect, respond};
use crate::qr::links;
use crate::qr::model::QrId;
use crate::qr::resolver::QrLinkResolver;
use actix_web::web::{Data, Json, Path};
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LinkExistingAssetPayload {
    pub asset_id: String,
}

pub async fn link_existing_asset(
    request: HttpRequest,
    context: Data<AppContext>,
    path: Path<String>,
    body: Json<LinkExistingAssetPayload>,
) -> impl Responder {
    let session = match session_from_request(&request) {
        Ok(session) => session,
        Err(rejection) => return respond(Err(rejection.into())),
    };

    respond(link_qr_to_asset(&context, &session, path.into_inner(), &body.asset_id).await)
}

pub async fn link_qr_to_asset(
    context: &AppContext,
    session: &Session,
    qr_id: String,
    asset_id: &str,
) -> Result<HttpResponse, ApiError> {
    let store = context.store.as_ref();
    let scope = require_permission(
        store,
        session,
        PermissionEntity::Qr,
        PermissionAction::Update,
    )
    .await?;
    let organization_id = scope.organization_id.as_str();

    let qr_id = QrId::new(qr_id).map_err(|_| Rejection::bad_request("Missing QR identifier"))?;
    let Some(asset_id) = non_empty(Some(asset_id)) else {
        return Err(Rejection::bad_request("Missing asset identifier").into());
    };

    let Some(qr) = QrLinkResolver::new(store)
        .find(&qr_id, organization_id)
        .await?
    else {
        return Err(Rejection::not_in_organization().into());
    };

    if qr.link_state().is_linked() {
        return Err(already_linked().into());
    }

    if !store.asset_exists(asset_id, organization_id).await? {
        return Err(Rejection::not_found("Asset not found").into());
    }

    if !store
        .link_asset(qr_id.as_str(), organization_id, asset_id)
        .await?
    {
        log::warn!("QR '{qr_id}' was linked by another request before '{asset_id}' could be");
        return Err(already_linked().into());
    }
    log::info!(
        "QR '{qr_id}' linked to asset '{asset_id}' by '{}' in organization '{organization_id}'",
        scope.account_id
    );

    Ok(redirect(&links::qr_page(&qr_id)))
}

fn already_linked() -> Rejection {
    Rejection::conflict("This QR code is already linked to an asset")
}
