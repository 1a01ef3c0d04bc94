pub mod app_context;
pub mod auth;
pub mod config;
pub mod constants;
pub mod db;
pub mod entrypoint;
pub mod error;
pub mod helpers;
pub mod http_server;
pub mod qr;
pub mod token_provider;
