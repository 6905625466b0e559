//! Reference host for `cellrules_core`.
//!
//! Lists the registered rules, or runs one of them on a one-dimensional ring
//! and prints each generation as a line of text.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info};

use cellrules_core::prelude::*;
use cellrules_core::registry;

mod config;
mod ring;

use config::{Command, Config};
use ring::Ring;

fn main() -> Result<()> {
    let (command, config) = config::parse_args(std::env::args().skip(1))?;
    simple_logger::init_with_level(config.log_level)?;
    info!("Starting cellrules v{} ...", env!("CARGO_PKG_VERSION"));
    debug!("{:?}", config);

    match command {
        Command::Help => println!("{}", config::USAGE),
        Command::List => list_rules(),
        Command::Run => run(&config)?,
    }
    Ok(())
}

fn list_rules() {
    for d in registry::descriptors() {
        let m = d.metadata;
        let lattices = match m.compatible_lattices {
            Some(lattices) => lattices.iter().map(|l| l.id()).join(", "),
            None => "all".to_owned(),
        };
        println!("{} ({})", d.id, m.display_name);
        println!("    folders:  {}", m.folders.iter().join(", "));
        println!("    lattices: {}", lattices);
        println!("    {}", m.tooltip);
    }
}

fn run(config: &Config) -> Result<()> {
    let rule = registry::construct(&config.rule)?;
    rule.ensure_compatible(config.lattice)?;

    let seeds = if config.seeds.is_empty() {
        vec![(config.width / 2, 1)]
    } else {
        config.seeds.clone()
    };
    let mut ring = Ring::new(config.width, config.lattice, config.num_states, &seeds)
        .context("unable to set up the initial generation")?;

    info!(
        "Running {} on a {} lattice with {} states",
        rule, config.lattice, config.num_states,
    );
    println!("{:>5} |{}|", ring.generation(), ring.render());
    for _ in 0..config.generations {
        ring.step(&rule);
        println!("{:>5} |{}|", ring.generation(), ring.render());
    }
    Ok(())
}
