use tokio::io::AsyncReadExt;
use tracing::info;

use probekit_common::config::ScanConfig;
use probekit_core::handler;
use probekit_core::scanner::PortScanner;

pub async fn request(body: Option<String>, cfg: ScanConfig) -> anyhow::Result<()> {
    let body: String = match body {
        Some(body) => body,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let scanner = PortScanner::new(cfg);
    let reply = handler::handle_scan_request(&scanner, body.as_bytes()).await;

    println!("{}", serde_json::to_string(&reply.body)?);

    if !reply.is_success() {
        anyhow::bail!("request answered with status {}", reply.status);
    }
    info!("Request answered with status {}", reply.status);
    Ok(())
}
