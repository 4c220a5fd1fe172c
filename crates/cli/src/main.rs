//! benchplot CLI: import benchmark CSVs and query plot traces.
//!
//! Three modes:
//! - **Import**: `benchplot import -i results.csv [-o db.sqlite] [-x COL...]...`
//! - **Shell mode**: `benchplot [flags] COMMAND`, single request, print reply, exit
//! - **Pipe mode**: `cat requests.jsonl | benchplot`, one JSON request per line

mod commands;
mod logging;
mod parse;
mod pipe;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use tracing::info;

use benchplot_core::Config;
use benchplot_engine::{open_connection, OpenOptions};
use benchplot_executor::{Command, Executor};
use benchplot_import::{table_name_from_path, Importer, SourceRecordSet};

use commands::build_cli;
use parse::{matches_to_action, CliAction, ImportArgs};

fn main() {
    let matches = build_cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.log_level, config.log_file.as_deref()) {
        eprintln!("{}", e);
        process::exit(1);
    }

    let exit_code = if matches.subcommand().is_some() {
        run_shell_mode(&matches, &config)
    } else if std::io::stdin().is_terminal() {
        let _ = build_cli().print_help();
        println!();
        2
    } else {
        pipe::run_stdio(&Executor::with_fs_store(&config))
    };
    process::exit(exit_code);
}

/// Configuration file (or defaults) with command-line overrides applied.
fn load_config(matches: &clap::ArgMatches) -> Result<Config, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::load(path).map_err(|e| format!("Failed to load config: {}", e))?,
        None => Config::default(),
    };
    if let Some(db) = matches.get_one::<String>("db") {
        config.database = PathBuf::from(db);
    }
    if let Some(charts) = matches.get_one::<String>("charts") {
        config.charts_dir = PathBuf::from(charts);
    }
    if let Some(log_file) = matches.get_one::<String>("log-file") {
        config.log_file = Some(PathBuf::from(log_file));
    }
    Ok(config)
}

fn run_shell_mode(matches: &clap::ArgMatches, config: &Config) -> i32 {
    match matches_to_action(matches, &config.plot) {
        Ok(CliAction::Import(args)) => match run_import(config, args) {
            Ok(summary) => {
                println!("{}", summary);
                0
            }
            Err(e) => {
                eprintln!("(error) {}", e);
                1
            }
        },
        Ok(CliAction::Execute(cmd)) => run_command(&Executor::with_fs_store(config), cmd),
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}

fn run_command(executor: &Executor, cmd: Command) -> i32 {
    let reply = executor.handle(cmd);
    let body = serde_json::to_string_pretty(&reply.body).unwrap_or_else(|_| "null".to_string());
    if reply.is_success() {
        println!("{}", body);
        0
    } else {
        eprintln!("{}", body);
        1
    }
}

fn run_import(config: &Config, args: ImportArgs) -> benchplot_core::Result<String> {
    let database = args.output.unwrap_or_else(|| config.database.clone());
    let source = SourceRecordSet::from_csv_path(&args.input)?;
    let table = table_name_from_path(&args.input);
    info!(
        input = %args.input.display(),
        database = %database.display(),
        table = %table,
        "importing"
    );

    let mut conn = open_connection(&database, &OpenOptions::new())?;
    let summary = Importer::new(&config.plot).import(&mut conn, &source, &table, &args.indexes)?;
    Ok(summary.summary())
}
