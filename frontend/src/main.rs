#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting solar planner frontend");

    // Resolve the runtime config before mounting so the first request
    // already sees the right API base URL.
    spawn_local(async move {
        solar_planner_frontend::config::init().await;
        solar_planner_frontend::mount_app();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Browser-only entry point; host builds exist for the test suite.
}
