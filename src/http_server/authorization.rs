use crate::auth::session::Session;
use crate::error::Rejection;
use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;

pub fn extract_authorization_token(request: &HttpRequest) -> Option<String> {
    let value = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

pub fn session_from_request(request: &HttpRequest) -> Result<Session, Rejection> {
    let Some(jwt) = extract_authorization_token(request) else {
        return Err(Rejection::unauthorized("Missing Authorization header"));
    };
    Session::from_jwt(jwt)
}
