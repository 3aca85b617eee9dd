//! Resize every image in the screenshot directory to the App Store size.
//!
//! Takes no arguments. Set `RUST_LOG=debug` for per-file diagnostics on stderr.

use tracing_subscriber::EnvFilter;

use screenshot_resizer::{BatchResizer, ResizerConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ResizerConfig::default();
    tracing::debug!(
        dir = %config.target_dir.display(),
        target = %config.target,
        "Starting screenshot resize"
    );

    let resizer = BatchResizer::new(config);
    let run = resizer.run(&mut std::io::stdout().lock())?;

    tracing::debug!(?run, "Done");
    Ok(())
}
