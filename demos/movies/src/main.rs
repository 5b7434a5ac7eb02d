mod models;

use sgorm::{Config, Registry};
use sgorm_cli::SgormCli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let config = Config::load_from_env()?;
    tracing::debug!(default = %config.default, "using database configuration");

    let cli = SgormCli::new(Registry::new(config), models::all());
    cli.parse_and_run().await
}
