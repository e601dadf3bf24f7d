//! Kinship CLI - Command-line interface for the kinship relationship engine.

use clap::Parser;
use kinship_cli::{commands, Cli, Command, Config, Formatter};
use kinship_graph::FamilyGraph;
use kinship_store::SqliteStore;

fn main() {
    // Diagnostics go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> kinship_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // Open the database and build the graph facade
    let db_path = cli.db.unwrap_or(config.db_path);
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let store = SqliteStore::new(&db_path)?;
    let mut graph = FamilyGraph::new(store);

    match cli.command {
        Command::Person(args) => commands::execute_person(args, &mut graph, &formatter)?,
        Command::Profile(args) => commands::execute_profile(args, &mut graph, &formatter)?,
        Command::Picture(args) => commands::execute_picture(args, &mut graph, &formatter)?,
        Command::Relate(args) => commands::execute_relate(args, &mut graph, &formatter)?,
    }

    Ok(())
}
