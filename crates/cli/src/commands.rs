//! clap command tree.

use clap::{Arg, ArgAction, Command};

/// Build the full `benchplot` command.
pub fn build_cli() -> Command {
    Command::new("benchplot")
        .about("Import benchmark CSV results and query plot traces")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("Database file (overrides the configuration)"),
        )
        .arg(
            Arg::new("charts")
                .long("charts")
                .global(true)
                .help("Saved chart directory (overrides the configuration)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .global(true)
                .help("Append log output to this file instead of stderr"),
        )
        .subcommand(import_cmd())
        .subcommand(Command::new("controls").about("Show control values, axis options and saved charts"))
        .subcommand(trace_cmd())
        .subcommand(
            Command::new("valid")
                .about("Show control values compatible with the fixed ones")
                .arg(filter_arg()),
        )
        .subcommand(axes_cmd())
        .subcommand(
            Command::new("save")
                .about("Save a chart")
                .arg(Arg::new("name").required(true))
                .arg(
                    Arg::new("chart")
                        .required(true)
                        .help("Chart JSON, or @PATH to read it from a file"),
                ),
        )
        .subcommand(
            Command::new("open")
                .about("Replay a saved chart")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a saved chart")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(Command::new("charts").about("List saved charts"))
}

fn import_cmd() -> Command {
    Command::new("import")
        .about("Load a CSV file into the database, replacing the table")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .required(true)
                .help("CSV file; the table is named after its stem"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Database file (default: configured database)"),
        )
        .arg(
            Arg::new("index")
                .short('x')
                .long("index")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Columns of one index; repeat for more indexes"),
        )
}

fn trace_cmd() -> Command {
    Command::new("trace")
        .about("Build one trace")
        .arg(Arg::new("x").long("x").help("X axis column (default: configured)"))
        .arg(Arg::new("y").long("y").help("Y axis column (default: configured)"))
        .arg(filter_arg())
}

fn axes_cmd() -> Command {
    Command::new("axes")
        .about("Re-query new axes for existing traces")
        .arg(Arg::new("x").long("x").help("New X axis column"))
        .arg(Arg::new("y").long("y").help("New Y axis column"))
        .arg(
            Arg::new("trace")
                .long("trace")
                .short('t')
                .action(ArgAction::Append)
                .help("Filter tuple of one trace as a JSON object; repeatable"),
        )
}

fn filter_arg() -> Arg {
    Arg::new("filter")
        .short('f')
        .long("filter")
        .action(ArgAction::Append)
        .value_name("CONTROL=VALUE")
        .help("Control value; repeatable")
}
