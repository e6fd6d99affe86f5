use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod degree;
mod friends;
mod generation;
mod load;
mod path;
mod session;
mod show;
mod state;
mod status;
mod util;

#[cfg(test)]
mod test_support;

use config::{Args, Settings};
use session::Session;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let settings = Settings::from(&args);
    tracing::debug!(?settings, "starting");

    let mut session = Session::new(settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.query {
        Some(query) => {
            session.reload()?;
            session.execute(&query, &mut out)?;
        }
        None => {
            // The session stays usable without a graph; `reload` retries.
            if let Err(e) = session.reload() {
                tracing::error!(error = %format!("{e:#}"), "initial load failed");
                writeln!(out, "error: {e:#}")?;
            }
            session.interactive(io::stdin().lock(), &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
