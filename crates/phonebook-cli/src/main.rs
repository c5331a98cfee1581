//! Phonebook CLI - manage a personal contact directory.

use clap::Parser;
use phonebook_cli::commands;
use phonebook_cli::repl;
use phonebook_cli::{logging, Cli, Command, Config, Formatter, LoadStatus, Session};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> phonebook_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, falling back to defaults if the file is unreadable
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Startup continues without file logging
    if let Err(e) = logging::init(&config.settings.log_file) {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Logging disabled, cannot open {}: {}",
                config.settings.log_file.display(),
                e
            ))
        );
    }
    tracing::info!("Phonebook started");

    let database = cli
        .database
        .clone()
        .unwrap_or_else(|| config.settings.database.clone());
    let (mut session, status) = Session::open(database)?;
    match &status {
        LoadStatus::Loaded(_) | LoadStatus::Missing => {}
        LoadStatus::Corrupt(msg) => eprintln!(
            "{}",
            formatter.warning(&format!(
                "Could not read {} ({}); starting with an empty phone book",
                session.path().display(),
                msg
            ))
        ),
    }

    // Handle commands
    match cli.into_command() {
        Command::Menu => {
            if let LoadStatus::Loaded(count) = status {
                println!("{}", formatter.info(&format!("Imported {} contact(s)", count)));
            }
            repl::run_menu(&mut session, &config, &formatter)?;
        }
        Command::List => commands::execute_list(&session, &formatter)?,
        Command::Add(args) => commands::execute_add(args, &mut session, &formatter)?,
        Command::Import(args) => commands::execute_import(args, &mut session, &formatter)?,
        Command::Search(args) => commands::execute_search(args, &session, &formatter)?,
        Command::History(args) => commands::execute_history(args, &session, &formatter)?,
        Command::Update(args) => commands::execute_update(args, &mut session, &formatter)?,
        Command::Delete(args) => commands::execute_delete(args, &mut session, &formatter)?,
        Command::DeleteAll(args) => commands::execute_delete_all(args, &mut session, &formatter)?,
        Command::Sort(args) => commands::execute_sort(args, &mut session, &formatter)?,
        Command::Group => commands::execute_group(&session, &formatter)?,
    }

    // The menu saves on quit; one-shot commands save here
    if session.is_dirty() {
        session.save()?;
    }

    tracing::info!("Phonebook exited");
    Ok(())
}
