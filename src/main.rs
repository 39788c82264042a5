use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launch_dash::{api, data};

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(about = "Interactive dashboard for launch outcome data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Port for the HTTP interface
        #[arg(short, long, default_value = "8050")]
        port: u16,

        /// CSV dataset to download at startup
        #[arg(long, default_value = data::DEFAULT_DATA_URL)]
        data_url: String,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "launch_dash=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let (port, data_url) = match cli.command {
        Some(Commands::Serve { port, data_url }) => (port, data_url),
        None => (8050, data::DEFAULT_DATA_URL.to_string()),
    };

    serve(port, &data_url).await
}

async fn serve(port: u16, data_url: &str) -> anyhow::Result<()> {
    tracing::info!("Downloading launch records from {}", data_url);

    // A failed or malformed download is fatal: exit with the diagnostic
    // instead of binding the listener over a broken table.
    let records = data::load(data_url).await?;
    tracing::info!("Loaded {} launch records", records.len());

    let state = data::DashboardState::from_records(records)?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Dashboard listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
