use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use repfam_core::models::FamilySet;
use repfam_graph::{GroupingConfig, analyze_with_progress};
use repfam_io::{GffWrite, write_dot};

pub fn run_group(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let input = matches
        .get_one::<String>("in")
        .expect("A path to a families file is required.");

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => GroupingConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load grouping config from {}", path))?,
        None => GroupingConfig::default(),
    };
    if let Some(thresh) = matches.get_one::<f64>("thresh") {
        config.threshold = *thresh;
    }

    if let Some(threads) = matches.get_one::<usize>("threads") {
        rayon::ThreadPoolBuilder::new()
            .num_threads(*threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let mut families = FamilySet::try_from(input.as_str())?;
    families.sort_by_members();
    info!(
        "Read {} families with {} members from {}",
        families.len(),
        families.total_members(),
        input
    );

    let pb = match matches.get_flag("progress") {
        true => {
            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?,
            );
            pb.set_message("Scoring family pairs");
            pb
        }
        false => ProgressBar::hidden(),
    };

    let grouping = analyze_with_progress(&families, &config, &pb)?;

    if let Some(dot) = matches.get_one::<String>("dot") {
        if let Err(err) = write_dot(dot, &grouping.directed_graph()) {
            warn!("Failed to write DOT output to {}: {}", dot, err);
        }
    }

    match matches.get_one::<String>("output") {
        Some(output) => families
            .write_gff(output, &grouping.identities)
            .with_context(|| format!("Failed to write annotations to {}", output))?,
        None => {
            let stdout = io::stdout();
            families.write_gff_to(BufWriter::new(stdout.lock()), &grouping.identities)?;
        }
    }

    Ok(())
}
