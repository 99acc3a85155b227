use std::io;

use pushkind_parking::models::config::{CONFIG_PATH_VAR, ParkingConfig};
use pushkind_parking::shell::{local_now, run_session};

fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let config_path = ParkingConfig::resolve_path(std::env::var(CONFIG_PATH_VAR).ok());
    let config = match ParkingConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load configuration from {config_path}: {e}");
            ParkingConfig::default()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &config, local_now)
}
