// project-level constants
pub const QR_LINK_VERSION: &str = env!("CARGO_PKG_VERSION");

// -------------------------------------------------------------------------------------------------

// server constants
#[cfg(debug_assertions)]
pub const DEFAULT_ADDR: &str = "localhost";
#[cfg(not(debug_assertions))]
pub const DEFAULT_ADDR: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 8080;

pub const DEFAULT_CORS_MAX_AGE: usize = 3600;

// -------------------------------------------------------------------------------------------------

// environment variables
pub const ENV_ADDR: &str = "QR_LINK_ADDR";
pub const ENV_PORT: &str = "QR_LINK_PORT";
pub const ENV_STORE: &str = "QR_LINK_STORE";
pub const ENV_CORS_MAX_AGE: &str = "QR_LINK_CORS_MAX_AGE";
pub const ENV_ACCOUNT_ID: &str = "QR_LINK_ACCOUNT_ID";
pub const ENV_ACCOUNT_SECRET: &str = "QR_LINK_ACCOUNT_SECRET";

// -------------------------------------------------------------------------------------------------

// presentation constants
pub const LINK_PAGE_TITLE: &str = "Link QR with asset";

pub const NOT_IN_ORGANIZATION_TITLE: &str = "Not allowed";
pub const NOT_IN_ORGANIZATION_MESSAGE: &str =
    "This QR code doesn't belong to your current organization.";
