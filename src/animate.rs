use crate::config::RunConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::create_history_logger;
use crate::render::Renderer;
use crate::simulation::{FinishedReason, Simulation};
use std::thread;
use tracing::info;

/// Builds the initial grid described by `config`.
pub fn initial_grid(config: &RunConfig) -> Result<(String, Grid)> {
    let pattern = config.load_pattern()?;
    let grid = Grid::new(config.height, config.width)?.seed(&pattern.translated(config.offset))?;

    Ok((pattern.name, grid))
}

/// Runs the animation.
///
/// Each of the `steps` frames renders the current generation, advances to the next one
/// and then waits for `interval`.
pub fn animate(config: &RunConfig, renderer: &mut dyn Renderer) -> Result<FinishedReason> {
    let (pattern, grid) = initial_grid(config)?;
    info!(
        pattern = %pattern,
        height = config.height,
        width = config.width,
        steps = config.steps,
        "starting simulation"
    );

    let history = create_history_logger(config.history.clone(), &pattern, config.height, config.width);
    let mut simulation = Simulation::new(grid, history);

    for _ in 0..config.steps {
        renderer.render(simulation.generation(), simulation.grid())?;

        if config.stop_when_settled {
            if let Some(reason) = simulation.settled().cloned() {
                info!(generation = simulation.generation(), ?reason, "stopping early");
                return simulation.finish(reason);
            }
        }

        simulation.advance();
        thread::sleep(config.interval);
    }

    info!(generation = simulation.generation(), "step limit reached");
    simulation.finish(FinishedReason::StepLimitReached)
}
