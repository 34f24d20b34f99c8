use devops_tutor::config::ServerConfig;
use devops_tutor::init_tracing;
use devops_tutor::server::{DemoServer, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let server = DemoServer::bind(&config).await?;

    server.serve_until(shutdown_signal()).await?;
    Ok(())
}
