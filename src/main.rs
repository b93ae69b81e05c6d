use std::net::SocketAddr;

use clap::Parser;
use tracing::info;

use backoffice::cli::{Cli, Command, run_users};
use backoffice::config::CONFIG;
use backoffice::{api, db};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_level.as_str())
        .init();

    let cli = Cli::parse();
    let pool = db::connect(&CONFIG.database.url()).await?;

    match cli.command {
        Command::Serve => {
            let app = api::app(pool);
            let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
            info!("Server running at http://{}", addr);
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
        Command::Users { command } => {
            println!("{}", run_users(&pool, command).await?);
        }
    }

    Ok(())
}
