use crate::error::Result;
use crate::grid::{Coord, Grid};
use crate::simulation::FinishedReason;
use serde_json::json;
use std::{
    fs::File,
    io::{BufWriter, Write},
};
use tracing::info;
use uuid::Uuid;

/// Picks a history logger: a JSON file when `filename` is given, nothing otherwise.
pub fn create_history_logger(
    filename: Option<String>,
    pattern: &str,
    height: usize,
    width: usize,
) -> Box<dyn HistoryLogger> {
    match filename {
        None => Box::new(NoOpHistoryLogger {}),
        Some(filename) => Box::new(JsonHistoryLogger::new(
            filename,
            pattern.to_string(),
            height,
            width,
        )),
    }
}

/// Records the generations of a run.
pub trait HistoryLogger {
    #[allow(unused_variables)]
    fn log_generation(&mut self, generation: usize, grid: &Grid) {}

    #[allow(unused_variables)]
    fn log_finished(&mut self, reason: &FinishedReason) {}

    fn save(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct Generation {
    generation: usize,
    population: usize,
    cells: Vec<Coord>,
}

struct NoOpHistoryLogger;
impl HistoryLogger for NoOpHistoryLogger {}

struct JsonHistoryLogger {
    filename: String,
    run_id: String,
    pattern: String,
    height: usize,
    width: usize,
    generations: Vec<Generation>,
    finished_reason: Option<FinishedReason>,
}

impl JsonHistoryLogger {
    fn new(filename: String, pattern: String, height: usize, width: usize) -> JsonHistoryLogger {
        JsonHistoryLogger {
            filename,
            run_id: Uuid::new_v4().to_string(),
            pattern,
            height,
            width,
            generations: Vec::new(),
            finished_reason: None,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "run_id": self.run_id,
            "pattern": self.pattern,
            "grid": {
                "height": self.height,
                "width": self.width,
            },
            "generations": self.generations,
            "finished_reason": self.finished_reason,
        })
    }
}

impl HistoryLogger for JsonHistoryLogger {
    fn log_generation(&mut self, generation: usize, grid: &Grid) {
        let cells = grid.alive_cells();
        self.generations.push(Generation {
            generation,
            population: cells.len(),
            cells,
        });
    }

    fn log_finished(&mut self, reason: &FinishedReason) {
        self.finished_reason = Some(reason.clone());
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.filename)?;
        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &self.to_json())?;
        // Dropping the writer would swallow a failed final write
        writer.flush()?;

        info!(
            file = %self.filename,
            generations = self.generations.len(),
            "history saved"
        );
        Ok(())
    }
}
