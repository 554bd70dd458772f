use crate::error::{Error, Result};
use crate::grid::Coord;
use crate::patterns::{self, PatternBuf};
use clap::{App, Arg, ArgGroup, ArgMatches};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Where the initial cells come from.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternSource {
    Named(String),
    File(PathBuf),
    Random { density: f64, seed: u64 },
}

/// Everything the driving loop needs for a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub height: usize,
    pub width: usize,
    pub pattern: PatternSource,
    pub offset: Coord,
    pub steps: usize,
    pub interval: Duration,
    pub history: Option<String>,
    pub stop_when_settled: bool,
    pub plain: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            height: 40,
            width: 40,
            pattern: PatternSource::Named("light-ship".to_string()),
            offset: (0, 0),
            steps: 200,
            interval: Duration::from_millis(100),
            history: None,
            stop_when_settled: false,
            plain: false,
        }
    }
}

impl RunConfig {
    pub fn app() -> App<'static, 'static> {
        App::new("life")
            .about("Runs Conway's Game of Life in the terminal")
            .arg(
                Arg::with_name("height")
                    .long("height")
                    .takes_value(true)
                    .default_value("40")
                    .help("number of rows in the grid"),
            )
            .arg(
                Arg::with_name("width")
                    .long("width")
                    .takes_value(true)
                    .default_value("40")
                    .help("number of columns in the grid"),
            )
            .arg(
                Arg::with_name("pattern")
                    .long("pattern")
                    .takes_value(true)
                    .help("built-in pattern to start from (default: light-ship)"),
            )
            .arg(
                Arg::with_name("pattern-file")
                    .long("pattern-file")
                    .takes_value(true)
                    .help("read the starting pattern from a file"),
            )
            .arg(
                Arg::with_name("random")
                    .long("random")
                    .takes_value(true)
                    .help("start from a random soup where each cell is alive with this probability"),
            )
            .group(ArgGroup::with_name("source").args(&["pattern", "pattern-file", "random"]))
            .arg(
                Arg::with_name("seed")
                    .long("seed")
                    .takes_value(true)
                    .default_value("0")
                    .help("seed for --random"),
            )
            .arg(
                Arg::with_name("offset")
                    .long("offset")
                    .takes_value(true)
                    .default_value("0,0")
                    .help("ROW,COL to shift the pattern by"),
            )
            .arg(
                Arg::with_name("steps")
                    .long("steps")
                    .takes_value(true)
                    .default_value("200")
                    .help("number of generations to display"),
            )
            .arg(
                Arg::with_name("interval")
                    .long("interval")
                    .takes_value(true)
                    .default_value("0.1")
                    .help("seconds between frames"),
            )
            .arg(
                Arg::with_name("history")
                    .long("history")
                    .takes_value(true)
                    .help("write every generation to this JSON file"),
            )
            .arg(
                Arg::with_name("stop-when-settled")
                    .long("stop-when-settled")
                    .help("stop once every cell is dead or the grid starts repeating"),
            )
            .arg(
                Arg::with_name("plain")
                    .long("plain")
                    .help("print frames as plain text instead of redrawing the terminal"),
            )
            .arg(
                Arg::with_name("list-patterns")
                    .long("list-patterns")
                    .help("list the built-in patterns and exit"),
            )
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<RunConfig> {
        let pattern = if let Some(path) = matches.value_of("pattern-file") {
            PatternSource::File(PathBuf::from(path))
        } else if matches.is_present("random") {
            PatternSource::Random {
                density: parse_value(matches, "random")?,
                seed: parse_value(matches, "seed")?,
            }
        } else {
            PatternSource::Named(matches.value_of("pattern").unwrap_or("light-ship").to_string())
        };

        let seconds: f64 = parse_value(matches, "interval")?;
        let interval = Duration::try_from_secs_f64(seconds).map_err(|_| {
            Error::InvalidConfig(format!(
                "interval {} must be a non-negative number of seconds",
                seconds
            ))
        })?;

        Ok(RunConfig {
            height: parse_value(matches, "height")?,
            width: parse_value(matches, "width")?,
            pattern,
            offset: parse_offset(matches.value_of("offset").unwrap_or("0,0"))?,
            steps: parse_value(matches, "steps")?,
            interval,
            history: matches.value_of("history").map(str::to_string),
            stop_when_settled: matches.is_present("stop-when-settled"),
            plain: matches.is_present("plain"),
        })
    }

    /// Resolves the pattern source into concrete cells, before the offset is applied.
    pub fn load_pattern(&self) -> Result<PatternBuf> {
        match &self.pattern {
            PatternSource::Named(name) => patterns::find(name).map(PatternBuf::from),
            PatternSource::File(path) => PatternBuf::load(path),
            PatternSource::Random { density, seed } => {
                PatternBuf::random(self.height, self.width, *density, *seed)
            }
        }
    }
}

fn parse_value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T> {
    let value = matches
        .value_of(name)
        .ok_or_else(|| Error::InvalidConfig(format!("missing --{}", name)))?;

    value
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("invalid value `{}` for --{}", value, name)))
}

fn parse_offset(value: &str) -> Result<Coord> {
    let invalid = || Error::InvalidConfig(format!("invalid offset `{}`, expected ROW,COL", value));

    let (row, col) = value.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;

    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Result<RunConfig> {
        let matches = RunConfig::app().get_matches_from(std::iter::once("life").chain(args.iter().copied()));
        RunConfig::from_matches(&matches)
    }

    #[test]
    fn when_no_arguments_are_given_the_defaults_are_used() {
        assert_eq!(config(&[]).unwrap(), RunConfig::default());
    }

    #[test]
    fn when_arguments_are_given_they_are_parsed() {
        let config = config(&[
            "--height", "10", "--width", "20", "--pattern", "glider", "--offset", "2,-1",
            "--steps", "5", "--interval", "0.25", "--history", "out.json", "--stop-when-settled",
            "--plain",
        ])
        .unwrap();

        assert_eq!(config.height, 10);
        assert_eq!(config.width, 20);
        assert_eq!(config.pattern, PatternSource::Named("glider".to_string()));
        assert_eq!(config.offset, (2, -1));
        assert_eq!(config.steps, 5);
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.history.as_deref(), Some("out.json"));
        assert!(config.stop_when_settled);
        assert!(config.plain);
    }

    #[test]
    fn when_a_random_soup_is_requested_the_density_and_seed_are_parsed() {
        let config = config(&["--random", "0.5", "--seed", "42"]).unwrap();

        assert_eq!(
            config.pattern,
            PatternSource::Random {
                density: 0.5,
                seed: 42
            }
        );
    }

    #[test]
    fn when_a_value_is_not_a_number_it_fails() {
        assert!(matches!(
            config(&["--height", "tall"]),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn when_the_interval_is_negative_it_fails() {
        assert!(matches!(
            config(&["--interval=-1"]),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn when_the_interval_is_too_large_it_fails() {
        assert!(matches!(
            config(&["--interval", "1e30"]),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn when_the_interval_is_not_a_number_of_seconds_it_fails() {
        assert!(matches!(
            config(&["--interval", "NaN"]),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn when_the_offset_is_malformed_it_fails() {
        assert!(matches!(parse_offset("3"), Err(Error::InvalidConfig(_))));
        assert!(matches!(parse_offset("a,b"), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn when_two_pattern_sources_are_given_parsing_fails() {
        let result = RunConfig::app().get_matches_from_safe(vec![
            "life", "--pattern", "glider", "--random", "0.5",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn when_loading_a_named_pattern_its_cells_are_returned() {
        let pattern = RunConfig::default().load_pattern().unwrap();

        assert_eq!(pattern.name, "light-ship");
        assert_eq!(pattern.cells.len(), 12);
    }
}
