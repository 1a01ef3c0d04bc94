use crate::constants::{NOT_IN_ORGANIZATION_MESSAGE, NOT_IN_ORGANIZATION_TITLE};
use nullnet_liberror::Error;
use serde::Serialize;

/// Status class of a user-visible refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusHint {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
}

impl StatusHint {
    pub fn code(self) -> u16 {
        match self {
            StatusHint::BadRequest => 400,
            StatusHint::Unauthorized => 401,
            StatusHint::Forbidden => 403,
            StatusHint::NotFound => 404,
            StatusHint::Conflict => 409,
        }
    }
}

/// A refusal meant to be displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub title: String,
    pub message: String,
    pub status: StatusHint,
}

impl Rejection {
    pub fn new(title: impl Into<String>, message: impl Into<String>, status: StatusHint) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            status,
        }
    }

    /// Covers both a missing QR code and one owned by another organization.
    pub fn not_in_organization() -> Self {
        Self::new(
            NOT_IN_ORGANIZATION_TITLE,
            NOT_IN_ORGANIZATION_MESSAGE,
            StatusHint::Forbidden,
        )
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("Unauthorized", message, StatusHint::Unauthorized)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new("Not allowed", message, StatusHint::Forbidden)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("Bad request", message, StatusHint::BadRequest)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("Not found", message, StatusHint::NotFound)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("Conflict", message, StatusHint::Conflict)
    }
}

/// Everything a request handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    Rejected(Rejection),
    Infrastructure(Error),
}

impl From<Rejection> for ApiError {
    fn from(rejection: Rejection) -> Self {
        ApiError::Rejected(rejection)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Infrastructure(err)
    }
}
