use product_manager::{db, menu, AppConfig};

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=debug, RUST_LOG=product_manager=trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Product Manager");

    let config = AppConfig::default();

    // Initialization failure is reported but never blocks the menu; the
    // first data operation will surface the storage error instead.
    if let Err(e) = db::init_db(&config) {
        log::error!("Failed to initialize database: {}", e);
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = menu::run(&config) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
