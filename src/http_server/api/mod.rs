mod health;
mod link_existing_asset;
mod qr_link;
mod qr_view;

pub use health::*;
pub use link_existing_asset::*;
pub use qr_link::*;
pub use qr_view::*;
