use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const GROUP_CMD: &str = "group";

pub fn create_group_cli() -> Command {
    Command::new(GROUP_CMD)
        .author("Databio")
        .about("Group repeat families whose features overlap and annotate them with cluster and clique identities.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("in")
                .long("in")
                .value_name("families")
                .required(true)
                .help("Families to group, one JSON array of features per line (.gz ok)"),
        )
        .arg(arg!(--output <output> "Where to write the GFF annotation (default: stdout)"))
        .arg(arg!(--dot <dot> "Write the scored overlap graph to this DOT file"))
        .arg(
            arg!(--thresh <thresh> "Minimum overlap ratio for two families to be linked (default: 0.1)")
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(--config <config> "TOML file with grouping parameters"))
        .arg(
            arg!(--threads <threads> "Number of threads used to score family pairs")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(--progress "Show a progress bar while scoring pairs").action(ArgAction::SetTrue))
}
