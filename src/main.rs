use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xiangqi_shell::{Session, ShellConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    info!("xiangqi starting");

    let mut session = Session::new(ShellConfig::default());
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
