use qr_link_server::entrypoint::start_server;

pub fn main() {
    if let Err(err) = start_server() {
        log::error!("QR link server failed: {}", err.to_str());
        std::process::exit(1);
    }
}
