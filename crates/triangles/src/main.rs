//! Reports every triangle of a 3D triangle set that touches another one.
//!
//! Reads the triangle list from stdin (or `--input`), builds an octree over
//! it and prints the indices of intersecting triangles, one per line, in
//! ascending order.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use log::info;

use collision_engine::foundation::logging::{self, LevelFilter};
use collision_engine::prelude::*;

mod input;

/// How intersections are searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Octree broad phase
    Octree,
    /// Every pair, no tree
    BruteForce,
    /// Octree, checked against every pair
    Verify,
}

fn main() -> Result<()> {
    let matches = Command::new("triangles")
        .about("Reports which triangles of a 3D triangle set intersect each other")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read triangles from FILE instead of stdin")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Load settings from a .toml or .ron file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("min-leaf-size")
                .long("min-leaf-size")
                .value_name("COUNT")
                .help("Override the octree leaf threshold")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("brute-force")
                .long("brute-force")
                .help("Test every pair directly instead of building an octree")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Run both detectors and fail if they disagree")
                .action(ArgAction::SetTrue)
                .conflicts_with("brute-force"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Log input and octree statistics")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let stats = matches.get_flag("stats");
    if stats {
        logging::init_with_default(LevelFilter::Info);
    } else {
        logging::init();
    }

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CollisionConfig::load_validated(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CollisionConfig::default(),
    };
    if let Some(&min_leaf_size) = matches.get_one::<usize>("min-leaf-size") {
        config.octree.min_leaf_size = min_leaf_size;
    }

    let polygons = match matches.get_one::<PathBuf>("input") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            input::read_polygons(BufReader::new(file))
                .with_context(|| format!("Failed to read triangles from {}", path.display()))?
        }
        None => input::read_polygons(io::stdin().lock()).context("Failed to read triangles from stdin")?,
    };
    info!("Read {} triangles", polygons.len());

    let strategy = if matches.get_flag("verify") {
        Strategy::Verify
    } else if matches.get_flag("brute-force") {
        Strategy::BruteForce
    } else {
        Strategy::Octree
    };

    let intersecting = find(polygons, &config, strategy)?;
    info!("{} triangles intersect another triangle", intersecting.len());

    let mut out = BufWriter::new(io::stdout().lock());
    for index in &intersecting {
        writeln!(out, "{index}")?;
    }
    out.flush()?;
    Ok(())
}

fn find(polygons: Vec<Polygon>, config: &CollisionConfig, strategy: Strategy) -> Result<BTreeSet<usize>> {
    if strategy == Strategy::BruteForce {
        return Ok(find_intersecting_brute_force(&polygons));
    }

    let reference = (strategy == Strategy::Verify).then(|| find_intersecting_brute_force(&polygons));

    let Some(bounds) = input::bounding_box(&polygons, config.bounds_padding)
        .context("Failed to compute the root box")?
    else {
        return Ok(BTreeSet::new());
    };

    let tree = Octree::build(polygons, bounds, &config.octree);
    info!("Octree: {}", tree.stats());

    let report = detect(&tree);
    info!("{} narrow-phase tests", report.pair_tests);

    if let Some(reference) = reference {
        if reference != report.indices {
            let missed: Vec<_> = reference.difference(&report.indices).collect();
            let spurious: Vec<_> = report.indices.difference(&reference).collect();
            bail!("Octree and brute-force results differ: missed {missed:?}, spurious {spurious:?}");
        }
        info!("Octree result verified against brute force");
    }

    Ok(report.indices)
}
