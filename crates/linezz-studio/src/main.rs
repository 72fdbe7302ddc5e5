mod config;

use anyhow::{Context, Result};
use linezz_engine::layout::SolidBrushVertex;
use linezz_engine::logging::{LoggingConfig, init_logging};
use linezz_engine::splash::SplashScene;

use config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_args(std::env::args().skip(1))?;
    log::debug!("studio config: {config:?}");

    linezz_engine::validate_vertex_layouts().context("vertex layout check failed")?;
    log_vertex_layout();

    let mask = SplashScene::linezz_logo()
        .aa_width(config.aa_width)
        .render_mask(config.width, config.height)?;
    mask.save(&config.output)
        .with_context(|| format!("writing {}", config.output.display()))?;

    log::info!(
        "splash mask {}x{} written to {}",
        config.width,
        config.height,
        config.output.display()
    );
    Ok(())
}

fn log_vertex_layout() {
    log::info!("SolidBrushVertex ({} bytes):", SolidBrushVertex::STRIDE);
    for attr in SolidBrushVertex::ATTRIBUTES {
        log::info!(
            "  offset {:>2}  {:?} {:?} ({} bytes)",
            attr.offset,
            attr.semantic,
            attr.format,
            attr.format.size()
        );
    }
}
