//! `toolpilot gateway` — Start the HTTP API server.

use toolpilot_config::AppConfig;

pub async fn run(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port {
        config.gateway.port = port;
    }

    println!();
    println!("  Toolpilot gateway listening on http://{}:{}", config.gateway.host, config.gateway.port);
    println!("  POST /api/agent with {{\"message\": \"...\"}} — Ctrl+C to stop.");
    println!();

    toolpilot_gateway::start(config).await
}
