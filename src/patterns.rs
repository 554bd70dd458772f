use crate::error::{Error, Result};
use crate::grid::Coord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::fs;
use std::path::Path;

/// A named set of alive cells, positioned relative to `(0, 0)`.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Coord],
}

impl Pattern {
    /// The cells shifted by `offset`.
    /// Coordinates saturate instead of overflowing, which leaves them out of bounds for any grid.
    pub fn translated(&self, offset: Coord) -> Vec<Coord> {
        translate(self.cells, offset)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(0, 0), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(1, 2), (2, 2), (3, 2)],
    },
    Pattern {
        name: "light-ship",
        cells: &[
            (0, 1), (0, 2),
            (1, 0), (1, 1), (1, 2), (1, 3),
            (2, 0), (2, 1), (2, 3), (2, 4),
            (3, 2), (3, 3),
        ],
    },
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

/// Looks up a built-in pattern. Case is ignored and `_` is accepted in place of `-`.
pub fn find(name: &str) -> Result<&'static Pattern> {
    let wanted = name.trim().to_lowercase().replace('_', "-");

    PATTERNS
        .iter()
        .find(|pattern| pattern.name == wanted)
        .ok_or_else(|| Error::UnknownPattern(name.to_string()))
}

/// A pattern read from a file or generated at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternBuf {
    pub name: String,
    pub cells: Vec<Coord>,
}

impl PatternBuf {
    /// Parses the plaintext pattern format.
    ///
    /// ```text
    /// rows 2
    /// cols 3
    /// m .*.
    /// m *.*
    /// ```
    ///
    /// `*` is an alive cell and `.` a dead one.
    pub fn parse(name: &str, contents: &str) -> Result<PatternBuf> {
        let metadata = Regex::new(r"rows (\d+)\s+cols (\d+)")
            .map_err(|e| Error::InvalidPattern(e.to_string()))?
            .captures(contents)
            .ok_or_else(|| {
                Error::InvalidPattern("missing `rows` and `cols` header".to_string())
            })?;

        let height: usize = metadata[1]
            .parse()
            .map_err(|_| Error::InvalidPattern(format!("invalid row count `{}`", &metadata[1])))?;
        let width: usize = metadata[2]
            .parse()
            .map_err(|_| Error::InvalidPattern(format!("invalid column count `{}`", &metadata[2])))?;

        let lines = Regex::new(r"(?m)^\s*m (.*)$").map_err(|e| Error::InvalidPattern(e.to_string()))?;

        let mut cells = Vec::new();
        for (row, captures) in lines.captures_iter(contents).enumerate() {
            if row >= height {
                return Err(Error::InvalidPattern(format!(
                    "more than {} rows",
                    height
                )));
            }

            let line = captures[1].trim();
            if line.chars().count() > width {
                return Err(Error::InvalidPattern(format!(
                    "row {} is longer than {} columns",
                    row, width
                )));
            }

            for (col, value) in line.chars().enumerate() {
                match value {
                    '*' => cells.push((row as isize, col as isize)),
                    '.' => {}
                    _ => {
                        return Err(Error::InvalidPattern(format!(
                            "invalid cell `{}` at ({}, {})",
                            value, row, col
                        )))
                    }
                }
            }
        }

        Ok(PatternBuf {
            name: name.to_string(),
            cells,
        })
    }

    /// Reads and parses a pattern file. The pattern is named after the file stem.
    pub fn load(path: &Path) -> Result<PatternBuf> {
        let contents = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());

        PatternBuf::parse(&name, &contents)
    }

    /// A random soup covering a `height` x `width` area.
    ///
    /// # Arguments
    /// * `density` - The probability of each cell being alive, between 0 and 1.
    /// * `seed` - The seed for the random number generator.
    pub fn random(height: usize, width: usize, density: f64, seed: u64) -> Result<PatternBuf> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidConfig(format!(
                "density {} is not between 0 and 1",
                density
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut cells = Vec::new();
        for row in 0..height {
            for col in 0..width {
                if rng.gen_bool(density) {
                    cells.push((row as isize, col as isize));
                }
            }
        }

        Ok(PatternBuf {
            name: format!("random-{}", seed),
            cells,
        })
    }

    pub fn translated(&self, offset: Coord) -> Vec<Coord> {
        translate(&self.cells, offset)
    }
}

impl From<&Pattern> for PatternBuf {
    fn from(pattern: &Pattern) -> Self {
        PatternBuf {
            name: pattern.name.to_string(),
            cells: pattern.cells.to_vec(),
        }
    }
}

fn translate(cells: &[Coord], (row, col): Coord) -> Vec<Coord> {
    cells
        .iter()
        .map(|&(r, c)| (r.saturating_add(row), c.saturating_add(col)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn when_finding_a_pattern_by_name_the_correct_pattern_is_returned() {
        let pattern = find("blinker").unwrap();

        assert_eq!(pattern.cells, &[(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn when_finding_a_pattern_case_and_underscores_are_ignored() {
        assert_eq!(find("Light_Ship").unwrap().name, "light-ship");
        assert_eq!(find("R-PENTOMINO").unwrap().name, "r-pentomino");
    }

    #[test]
    fn when_finding_an_unknown_pattern_it_fails() {
        assert!(matches!(find("spaceship"), Err(Error::UnknownPattern(name)) if name == "spaceship"));
    }

    #[test]
    fn when_translating_a_pattern_every_cell_is_shifted() {
        let pattern = find("blinker").unwrap();

        assert_eq!(pattern.translated((1, -1)), vec![(2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn when_translating_a_pattern_by_a_huge_offset_seeding_reports_out_of_bounds() {
        let cells = find("glider").unwrap().translated((isize::MAX, 0));

        assert!(cells.iter().all(|&(row, _)| row == isize::MAX));
        assert!(matches!(
            Grid::new(5, 5).unwrap().seed(&cells),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(PatternBuf::from(find("blinker").unwrap())
            .translated((0, isize::MIN))
            .iter()
            .all(|&(_, col)| col < 0));
    }

    #[test]
    fn when_parsing_a_pattern_the_alive_cells_are_returned() {
        let contents = "\
            rows 4
            cols 5
            m .**..
            m ****.
            m **.**
            m ..**.";
        let pattern = PatternBuf::parse("ship", contents).unwrap();

        assert_eq!(pattern.name, "ship");
        assert_eq!(pattern.cells, find("light-ship").unwrap().cells);
    }

    #[test]
    fn when_parsing_a_pattern_without_a_header_it_fails() {
        let result = PatternBuf::parse("bad", "m ***");

        assert!(matches!(result, Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn when_parsing_a_pattern_with_an_invalid_cell_it_fails() {
        let contents = "\
            rows 1
            cols 3
            m *x*";

        assert!(matches!(
            PatternBuf::parse("bad", contents),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn when_parsing_a_pattern_with_a_row_too_long_it_fails() {
        let contents = "\
            rows 1
            cols 2
            m ***";

        assert!(matches!(
            PatternBuf::parse("bad", contents),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn when_parsing_a_pattern_with_too_many_rows_it_fails() {
        let contents = "\
            rows 1
            cols 1
            m *
            m *";

        assert!(matches!(
            PatternBuf::parse("bad", contents),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn when_generating_a_random_soup_the_same_seed_gives_the_same_cells() {
        let first = PatternBuf::random(10, 10, 0.3, 7).unwrap();
        let second = PatternBuf::random(10, 10, 0.3, 7).unwrap();

        assert_eq!(first, second);
        assert!(first.cells.iter().all(|&(r, c)| r < 10 && c < 10));
        assert!(Grid::new(10, 10).unwrap().seed(&first.cells).is_ok());
    }

    #[test]
    fn when_generating_a_random_soup_with_full_density_every_cell_is_alive() {
        let soup = PatternBuf::random(3, 4, 1.0, 0).unwrap();

        assert_eq!(soup.cells.len(), 12);
    }

    #[test]
    fn when_generating_a_random_soup_with_an_invalid_density_it_fails() {
        assert!(matches!(
            PatternBuf::random(3, 3, 1.5, 0),
            Err(Error::InvalidConfig(_))
        ));
    }
}
