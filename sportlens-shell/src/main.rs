mod app;

fn main() {
    // Initialize the logger
    env_logger::init();
    log::info!("Starting SportLens");

    app::app_main();
}
