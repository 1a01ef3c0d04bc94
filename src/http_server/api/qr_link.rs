use crate::app_context::AppContext;
use crate::auth::permissions::{require_permission, PermissionAction, PermissionEntity};
use crate::auth::session::Session;
use crate::constants::LINK_PAGE_TITLE;
use crate::error::{ApiError, Rejection};
use crate::http_server::authorization::session_from_request;
use crate::http_server::responses::{redirect, respond};
use crate::qr::links::{self, LinkOptions};
use crate::qr::model::QrId;
use crate::qr::resolver::{QrLinkResolver, ResolutionOutcome};
use actix_web::web::{Data, Path};
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageHeader {
    pub title: String,
}

/// Payload rendered as the "unlinked QR code" choice screen.
#[derive(Debug, Serialize)]
pub struct LinkPagePayload {
    pub header: PageHeader,
    pub qr_id: QrId,
    pub options: LinkOptions,
}

impl LinkPagePayload {
    pub fn new(qr_id: QrId) -> Self {
        Self {
            header: PageHeader {
                title: LINK_PAGE_TITLE.to_string(),
            },
            options: LinkOptions::for_qr(&qr_id),
            qr_id,
        }
    }
}

pub async fn qr_link(
    request: HttpRequest,
    context: Data<AppContext>,
    path: Path<String>,
) -> impl Responder {
    let session = match session_from_request(&request) {
        Ok(session) => session,
        Err(rejection) => return respond(Err(rejection.into())),
    };

    respond(link_page(&context, &session, path.into_inner()).await)
}

pub async fn link_page(
    context: &AppContext,
    session: &Session,
    qr_id: String,
) -> Result<HttpResponse, ApiError> {
    let store = context.store.as_ref();
    let scope = require_permission(
        store,
        session,
        PermissionEntity::Qr,
        PermissionAction::Update,
    )
    .await?;

    let qr_id = QrId::new(qr_id).map_err(|_| Rejection::bad_request("Missing QR identifier"))?;

    match QrLinkResolver::new(store)
        .resolve(&qr_id, &scope.organization_id)
        .await?
    {
        ResolutionOutcome::Rejected(rejection) => Err(rejection.into()),
        // the canonical page re-resolves the link state on its own
        ResolutionOutcome::AlreadyLinked { qr_id } => Ok(redirect(&links::qr_page(&qr_id))),
        ResolutionOutcome::Linkable { qr_id } => {
            Ok(HttpResponse::Ok().json(LinkPagePayload::new(qr_id)))
        }
    }
}
