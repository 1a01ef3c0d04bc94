use crate::error::{ApiError, Rejection, StatusHint};
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorJson {
    pub title: String,
    pub message: String,
    pub status: u16,
}

impl From<&Rejection> for ErrorJson {
    fn from(rejection: &Rejection) -> Self {
        Self {
            title: rejection.title.clone(),
            message: rejection.message.clone(),
            status: rejection.status.code(),
        }
    }
}

fn status_code(hint: StatusHint) -> StatusCode {
    match hint {
        StatusHint::BadRequest => StatusCode::BAD_REQUEST,
        StatusHint::Unauthorized => StatusCode::UNAUTHORIZED,
        StatusHint::Forbidden => StatusCode::FORBIDDEN,
        StatusHint::NotFound => StatusCode::NOT_FOUND,
        StatusHint::Conflict => StatusCode::CONFLICT,
    }
}

pub fn error_response(err: ApiError) -> HttpResponse {
    match err {
        ApiError::Rejected(rejection) => {
            HttpResponse::build(status_code(rejection.status)).json(ErrorJson::from(&rejection))
        }
        ApiError::Infrastructure(err) => {
            log::error!("Request failed: {}", err.to_str());
            HttpResponse::InternalServerError().json(ErrorJson {
                title: "Something went wrong".to_string(),
                message: "The request could not be completed, please try again later."
                    .to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            })
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn respond(result: Result<HttpResponse, ApiError>) -> HttpResponse {
    result.unwrap_or_else(error_response)
}
