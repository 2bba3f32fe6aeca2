use resolver_api_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber is installed, since the level comes from the config.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        bind = %config.server.bind_address,
        port = config.server.port,
        nameservers = ?config.dns.nameservers,
        query_timeout_ms = config.dns.query_timeout_ms,
        cors_origins = ?config.server.cors_origins,
        "Configuration loaded"
    );
}
