use crate::app_context::AppContext;
use crate::auth::permissions::{require_permission, PermissionAction, PermissionEntity};
use crate::auth::session::Session;
use crate::error::{ApiError, Rejection};
use crate::http_server::authorization::session_from_request;
use crate::http_server::responses::{redirect, respond};
use crate::qr::links;
use crate::qr::model::{LinkState, QrId};
use crate::qr::resolver::QrLinkResolver;
use actix_web::web::{Data, Path};
use actix_web::{HttpRequest, HttpResponse, Responder};

pub async fn qr_view(
    request: HttpRequest,
    context: Data<AppContext>,
    path: Path<String>,
) -> impl Responder {
    let session = match session_from_request(&request) {
        Ok(session) => session,
        Err(rejection) => return respond(Err(rejection.into())),
    };

    respond(qr_page(&context, &session, path.into_inner()).await)
}

/// Canonical per-QR page: sends the caller to the linked asset or to the link screen.
pub async fn qr_page(
    context: &AppContext,
    session: &Session,
    qr_id: String,
) -> Result<HttpResponse, ApiError> {
    let store = context.store.as_ref();
    let scope = require_permission(store, session, PermissionEntity::Qr, PermissionAction::Read)
        .await?;

    let qr_id = QrId::new(qr_id).map_err(|_| Rejection::bad_request("Missing QR identifier"))?;

    let Some(qr) = QrLinkResolver::new(store)
        .find(&qr_id, &scope.organization_id)
        .await?
    else {
        return Err(Rejection::not_in_organization().into());
    };

    let location = match qr.link_state() {
        LinkState::Linked { asset_id } => links::asset_page(&asset_id),
        LinkState::Unlinked => links::link_page(&qr_id),
    };
    Ok(redirect(&location))
}
