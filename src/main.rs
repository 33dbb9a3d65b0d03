use std::process::ExitCode;

use blog_export::config::{AppConfig, credentials_from_env};
use blog_export::services::export;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let credentials = match credentials_from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match export::run(&config.into_export_settings(&credentials)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Export aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
