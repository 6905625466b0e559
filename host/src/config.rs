use anyhow::{anyhow, bail, Context, Result};
use std::str::FromStr;

use cellrules_core::prelude::{Lattice, State};

/// What the user asked the host to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every registered rule.
    List,
    /// Run a rule on a ring and print each generation.
    Run,
    /// Print usage information.
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rule: String,
    pub lattice: Lattice,
    pub num_states: u32,
    pub width: usize,
    pub generations: u64,
    /// Initial nonzero cells as `(index, state)`. If empty, the center cell
    /// starts in state 1.
    pub seeds: Vec<(usize, State)>,
    pub log_level: log::Level,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            rule: "sears-tower".to_owned(),
            lattice: Lattice::OneDimNearest,
            num_states: 50,
            width: 79,
            generations: 40,
            seeds: vec![],
            log_level: log::Level::Info,
        }
    }
}

pub const USAGE: &str = "\
Usage:
    cellrules list
    cellrules run [OPTIONS]

Options:
    --rule ID            rule to run (default: sears-tower)
    --lattice ID         1d or 1d-r2 (default: 1d)
    --states N           number of cell states (default: 50)
    --width W            number of cells in the ring (default: 79)
    --generations G      number of generations to print (default: 40)
    --seed INDEX=STATE   initial nonzero cell; may be repeated
    --log-level LEVEL    error, warn, info, debug, or trace (default: info)";

/// Parses command-line arguments (not including the program name).
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<(Command, Config)> {
    let mut args = args.into_iter();
    let command = match args.next().as_deref() {
        None | Some("help") | Some("--help") | Some("-h") => Command::Help,
        Some("list") => Command::List,
        Some("run") => Command::Run,
        Some(other) => bail!("unknown command {:?}\n\n{}", other, USAGE),
    };

    let mut config = Config::default();
    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };
        match flag.as_str() {
            "--rule" => config.rule = value()?,
            "--lattice" => {
                let id = value()?;
                config.lattice =
                    Lattice::from_id(&id).ok_or_else(|| anyhow!("unknown lattice {:?}", id))?;
            }
            "--states" => config.num_states = parse_number(&flag, &value()?)?,
            "--width" => config.width = parse_number(&flag, &value()?)?,
            "--generations" => config.generations = parse_number(&flag, &value()?)?,
            "--seed" => config.seeds.push(parse_seed(&value()?)?),
            "--log-level" => {
                let level = value()?;
                config.log_level = level
                    .parse()
                    .map_err(|_| anyhow!("invalid log level {:?}", level))?;
            }
            _ => bail!("unknown option {:?}\n\n{}", flag, USAGE),
        }
    }
    Ok((command, config))
}

fn parse_number<T>(flag: &str, s: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.parse()
        .with_context(|| format!("invalid value {:?} for {}", s, flag))
}

fn parse_seed(s: &str) -> Result<(usize, State)> {
    let (index, state) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("seed {:?} should look like INDEX=STATE", s))?;
    Ok((
        parse_number("--seed", index)?,
        parse_number("--seed", state)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(
            (Command::Help, Config::default()),
            parse_args(args("")).unwrap(),
        );
        assert_eq!(Command::List, parse_args(args("list")).unwrap().0);
    }

    #[test]
    fn test_parse_run() {
        let (command, config) = parse_args(args(
            "run --rule edge-filter --lattice 1d-r2 --states 8 --width 30 \
             --generations 5 --seed 3=7 --seed 10=1 --log-level debug",
        ))
        .unwrap();
        assert_eq!(Command::Run, command);
        assert_eq!(
            Config {
                rule: "edge-filter".to_owned(),
                lattice: Lattice::OneDimNextNearest,
                num_states: 8,
                width: 30,
                generations: 5,
                seeds: vec![(3, 7), (10, 1)],
                log_level: log::Level::Debug,
            },
            config,
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args("frobnicate")).is_err());
        assert!(parse_args(args("run --states")).is_err());
        assert!(parse_args(args("run --states -3")).is_err());
        assert!(parse_args(args("run --lattice hex")).is_err());
        assert!(parse_args(args("run --seed 12")).is_err());
        assert!(parse_args(args("run --color red")).is_err());
    }
}
