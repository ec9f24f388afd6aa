//! Static file server for the built site.
//!
//! Serves the Trunk `dist/` output with an SPA fallback to `index.html`
//! so deep links like `/projects/<slug>` load the application instead of
//! returning 404. Static hosts without a fallback rely on the bundled
//! `404.html` redirect shim instead.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use clap::Parser;
use color_eyre::eyre::Result;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Command-line interface for the portfolio server.
#[derive(Parser)]
#[command(name = "server", version, about = "Serve the built portfolio site")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Directory holding the built site
    #[arg(short, long, default_value = "dist")]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let index = cli.dir.join("index.html");
    let service = ServeDir::new(&cli.dir).not_found_service(ServeFile::new(index));

    let app = Router::new()
        .fallback_service(service)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("serving {} on http://{addr}", cli.dir.display());
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["server"]);
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_cli_custom_port_and_dir() {
        let cli = Cli::parse_from(["server", "--port", "8080", "--dir", "public"]);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.dir, PathBuf::from("public"));
    }
}
