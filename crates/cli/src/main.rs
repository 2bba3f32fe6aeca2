use clap::Parser;
use resolver_api_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "resolver-api")]
#[command(version)]
#[command(about = "HTTP JSON API for DNS lookups with nameserver failover")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Comma separated nameservers, tried in order
    #[arg(long, env = "RESOLVERS")]
    resolvers: Option<String>,

    /// Comma separated CORS origins, `*` for any
    #[arg(long, env = "CORS_ORIGIN")]
    cors_origin: Option<String>,

    /// Per-nameserver query timeout in milliseconds
    #[arg(long)]
    query_timeout_ms: Option<u64>,

    /// Deployment environment; `dev` enables debug logging
    #[arg(long, env = "RESOLVER_ENV")]
    env: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        cors_origins: cli.cors_origin,
        nameservers: cli.resolvers,
        query_timeout_ms: cli.query_timeout_ms,
        env: cli.env,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    info!("Starting resolver-api v{}", env!("CARGO_PKG_VERSION"));

    let app_state = di::build_app_state(&config);

    let web_addr = config.server.socket_addr()?;

    server::start_web_server(web_addr, app_state, &config.server.cors_origins).await?;

    info!("Server shutdown complete");
    Ok(())
}
