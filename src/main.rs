use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("tempo starting");
    std::process::exit(tempo_cli::run());
}
