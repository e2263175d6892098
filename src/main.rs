use anyhow::Context;
use tracing::info;

use backoffice_dashboard::{
    config,
    shell::{ShellAction, ShellEvent, ShellPolicy},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config().context("failed to load configuration")?;
    config::init_tracing(cfg.log_level(), cfg.log_json);

    let shell = ShellPolicy::from_config(&cfg);
    if let ShellAction::OpenWindow(window) = shell.on_event(ShellEvent::Ready) {
        info!(
            url = %window.url,
            width = window.width,
            height = window.height,
            "Desktop shell should open the dashboard window"
        );
    }

    backoffice_dashboard::server::serve(&cfg)
        .await
        .with_context(|| format!("failed to serve on {}", cfg.bind_address()))?;

    Ok(())
}
