use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sudoku-solver", version, about = "Sudoku placement checker and solver over JSON HTTP")]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("binding {}", cli.listen))?;
    log::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, sudoku_solver::api::router())
        .await
        .context("serving")?;
    Ok(())
}
