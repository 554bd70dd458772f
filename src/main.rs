use anyhow::Context;
use life_engine::patterns::PATTERNS;
use life_engine::render::{Renderer, TerminalRenderer, TextRenderer};
use life_engine::{animate, RunConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the display, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("life_engine=info"))
        .context("invalid log filter")?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter),
    )
    .context("could not install the log subscriber")?;

    let matches = RunConfig::app().get_matches();

    if matches.is_present("list-patterns") {
        for pattern in PATTERNS {
            println!("{} ({} cells)", pattern.name, pattern.cells.len());
        }
        return Ok(());
    }

    let config = RunConfig::from_matches(&matches).context("could not parse arguments")?;

    let mut renderer: Box<dyn Renderer> = if config.plain {
        Box::new(TextRenderer::new(std::io::stdout()))
    } else {
        Box::new(TerminalRenderer::new())
    };

    let reason = animate(&config, renderer.as_mut()).context("simulation failed")?;

    println!("Finished: {:?}", reason);
    Ok(())
}
