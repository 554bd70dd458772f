use crate::error::Result;
use crate::grid::{CellState, Grid};
use crate::history::HistoryLogger;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, info};

/// How many past generations are remembered when looking for a repeat.
const SETTLE_WINDOW: usize = 10;

/// Computes the next generation of `grid`.
///
/// The input is only read. Neighbours outside the grid count as dead, there is no wraparound.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.blank();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let neighbors = live_neighbors(grid, row, col);
            let alive = match (grid.cell(row, col), neighbors) {
                // Survival
                (CellState::Alive, 2) | (CellState::Alive, 3) => true,
                // Birth
                (CellState::Dead, 3) => true,
                _ => false,
            };
            next.set(row, col, CellState::from(alive));
        }
    }

    next
}

fn live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    let mut count = 0;

    // For each coordinate around the given one in all 8 directions
    for i in -1..=1 {
        for j in -1..=1 {
            if i == 0 && j == 0 {
                continue;
            }

            let neighbor = (row as isize + i, col as isize + j);
            if !grid.in_bounds(neighbor) {
                continue;
            }

            if grid.cell(neighbor.0 as usize, neighbor.1 as usize).is_alive() {
                count += 1;
            }
        }
    }

    count
}

/// Why a run ended, or why it is no longer changing.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum FinishedReason {
    /// Every cell is dead.
    Extinct,
    /// The current generation repeats the one `period` generations ago.
    Settled { period: usize },
    /// The driving loop ran all of its steps.
    StepLimitReached,
}

/// A running simulation.
/// Owns the current generation and records each new one with its history logger.
pub struct Simulation {
    grid: Grid,
    generation: usize,
    recent: VecDeque<Grid>,
    settled: Option<FinishedReason>,
    history: Box<dyn HistoryLogger>,
}

impl Simulation {
    /// Creates a new simulation starting from `grid` as generation 0.
    ///
    /// # Arguments
    /// * `grid` - The seeded initial grid.
    /// * `history` - Where each generation is recorded.
    pub fn new(grid: Grid, mut history: Box<dyn HistoryLogger>) -> Simulation {
        history.log_generation(0, &grid);

        let mut recent = VecDeque::with_capacity(SETTLE_WINDOW);
        recent.push_back(grid.clone());

        let settled = match grid.population() {
            0 => Some(FinishedReason::Extinct),
            _ => None,
        };

        Simulation {
            grid,
            generation: 0,
            recent,
            settled,
            history,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// `Some` once the population has died out or started repeating.
    pub fn settled(&self) -> Option<&FinishedReason> {
        self.settled.as_ref()
    }

    /// Replaces the current generation with the next one.
    pub fn advance(&mut self) -> &Grid {
        self.grid = step(&self.grid);
        self.generation += 1;
        self.history.log_generation(self.generation, &self.grid);

        let population = self.grid.population();
        debug!(generation = self.generation, population, "advanced");

        if self.settled.is_none() {
            self.settled = self.classify(population);
            if let Some(reason) = &self.settled {
                info!(generation = self.generation, ?reason, "simulation settled");
            }
        }

        &self.grid
    }

    /// Ends the run, saving the recorded history.
    pub fn finish(mut self, reason: FinishedReason) -> Result<FinishedReason> {
        self.history.log_finished(&reason);
        self.history.save()?;
        Ok(reason)
    }

    fn classify(&mut self, population: usize) -> Option<FinishedReason> {
        if population == 0 {
            return Some(FinishedReason::Extinct);
        }

        // The most recent generation is at the back
        let repeat = self
            .recent
            .iter()
            .rev()
            .position(|previous| *previous == self.grid);

        if self.recent.len() == SETTLE_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(self.grid.clone());

        repeat.map(|index| FinishedReason::Settled { period: index + 1 })
    }
}
