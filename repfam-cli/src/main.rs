mod group;

use anyhow::Result;
use clap::{ArgAction, Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "repfam";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Group genomic repeat families that are fragments of the same element.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Log every scored edge and group")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(group::cli::create_group_cli())
}

fn init_logging(verbose: bool) {
    let level = match verbose {
        true => "debug",
        false => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // GROUP
        //
        Some((group::cli::GROUP_CMD, matches)) => {
            group::handlers::run_group(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
