#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("efish-ui logging disabled: {}", e).into());
    }

    if let Err(e) = efish_ui::browser::start() {
        tracing::warn!("efish-ui failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("efish-ui runs in the browser; build it for wasm32-unknown-unknown");
}
