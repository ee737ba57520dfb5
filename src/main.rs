use std::sync::Arc;

use hr_portal::{
    AppConfig, FileSessionStorage, Shell, StorageState,
    config::Env,
    navigation::TracingNavigator,
    routes,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The entry point for the shell harness, responsible for initializing all
/// core components in order: Configuration, Logging, Session Storage, and the
/// mounted Shell. It then dispatches every path given on the command line
/// (the home path when none are given), logging each authorization outcome.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    // AppConfig::load() refuses to start production without an explicit
    // session store location.
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Sets the default log level. It prioritizes the RUST_LOG environment
    // variable, falling back to sensible defaults for local development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hr_portal=debug".into());

    // 3. Initialize Logging based on Environment
    // The structured logging format is dynamically selected based on APP_ENV.
    match config.env {
        Env::Local => {
            // LOCAL: Pretty print output for human readability during local
            // debugging.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON format output for ingestion by centralized log
            // aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Portal shell starting in {:?} mode", config.env);

    // 4. Session Storage Initialization
    // The file-backed store holds the single persisted session record written
    // by the login flow.
    let storage =
        Arc::new(FileSessionStorage::new(&config.session_store_path)) as StorageState;

    // 5. Shell Assembly
    // Mounts the standard route table over the session context and a logging
    // navigation surface.
    let table = routes::default_table();
    let home_path = config.home_path.clone();
    let mut shell = Shell::mount(config, storage, TracingNavigator::new(), table);

    // 6. One-Shot Startup Sequence
    // Restores the persisted session (malformed records degrade to logged
    // out) and resets scroll exactly once.
    shell.start().await;

    // 7. Dispatch
    // Navigate each requested path through the gate, or just the home path
    // when invoked without arguments.
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        shell.navigate(&home_path);
    } else {
        for path in &paths {
            shell.navigate(path);
        }
    }
}
