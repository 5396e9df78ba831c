use anyhow::Context;
use clap::Parser;
use rectclip::config::{Args, DemoConfig};
use rectclip::render::Canvas;
use rectclip::{Clipper, LineSegment, Scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))
}

/// Prints one report line per segment, reusing a single clipper.
fn report_scene(scene: &Scene) {
    let mut clipper = Clipper::new(LineSegment::default(), *scene.window());
    for segment in scene.segments() {
        clipper.set_line_segment(*segment);
        clipper.clip();
        let (x0, y0, x1, y1) = segment.coords();
        println!("({x0}, {y0}) -> ({x1}, {y1}): {}", clipper.report());
    }
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::try_from(Args::parse())?;
    init_tracing()?;

    let window = config.scene.window();
    info!(
        xmin = window.xmin,
        xmax = window.xmax,
        ymin = window.ymin,
        ymax = window.ymax,
        segments = config.scene.len(),
        "clipping scene"
    );
    report_scene(&config.scene);

    if let Some(path) = &config.png {
        let mut canvas = Canvas::new(config.size.width, config.size.height);
        config.scene.render(&mut canvas);
        canvas
            .save(path)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        info!(path = %path.display(), "wrote snapshot");
    }

    Ok(())
}
