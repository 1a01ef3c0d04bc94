use chrono::Utc;
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use nullnet_libtoken::Token;

pub fn get_timestamp_string() -> String {
    Utc::now().to_rfc3339()
}

pub fn get_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn authenticate(token: String) -> Result<(String, Token), Error> {
    let token_info = Token::from_jwt(&token).handle_err(location!())?;

    Ok((token, token_info))
}

/// Returns `None` for missing, null and blank values.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
