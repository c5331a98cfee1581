//! Interactive menu mode.

use crate::cli::{
    AddArgs, DeleteAllArgs, DeleteArgs, FieldArg, ImportArgs, SearchArgs, SortArgs, UpdateArgs,
};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use clap::ValueEnum;
use phonebook_domain::SortKey;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

type LineEditor = DefaultEditor;

/// A top-level menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Print,
    Create,
    Search,
    Update,
    Delete,
    Sort,
    Group,
    Quit,
}

impl MenuChoice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Print),
            "2" => Some(Self::Create),
            "3" => Some(Self::Search),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Sort),
            "7" => Some(Self::Group),
            "q" | "Q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the interactive menu until the user quits, then save.
pub fn run_menu(session: &mut Session, config: &Config, formatter: &Formatter) -> Result<()> {
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(true)
        .build();
    let mut editor = LineEditor::with_config(editor_config)?;

    let history_path = get_history_path().ok();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    tracing::info!("Menu started");
    loop {
        print_menu();
        let Some(line) = read(&mut editor, "Enter your choice (1/2/3/4/5/6/7/q): ")? else {
            break;
        };
        println!();

        let Some(choice) = MenuChoice::parse(&line) else {
            eprintln!("{}", formatter.error("Invalid choice. Please try again."));
            continue;
        };
        if choice == MenuChoice::Quit {
            break;
        }

        if let Err(e) = dispatch(choice, &mut editor, session, formatter) {
            eprintln!("{}", formatter.error(&e.to_string()));
        }
        println!();
    }

    println!("{}", formatter.info("Exiting the phone book ..."));
    if session.is_dirty() {
        session.save()?;
        println!(
            "{}",
            formatter.success(&format!("Contacts saved to {}", session.path().display()))
        );
    }

    if let Some(path) = &history_path {
        editor.save_history(path).ok();
    }
    tracing::info!("Menu closed");
    Ok(())
}

fn dispatch(
    choice: MenuChoice,
    editor: &mut LineEditor,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    match choice {
        MenuChoice::Print => commands::execute_list(session, formatter),
        MenuChoice::Create => create(editor, session, formatter),
        MenuChoice::Search => search(editor, session, formatter),
        MenuChoice::Update => update(editor, session, formatter),
        MenuChoice::Delete => delete(editor, session, formatter),
        MenuChoice::Sort => sort(editor, session, formatter),
        MenuChoice::Group => commands::execute_group(session, formatter),
        MenuChoice::Quit => Ok(()),
    }
}

fn create(editor: &mut LineEditor, session: &mut Session, formatter: &Formatter) -> Result<()> {
    println!("1. Add contact manually");
    println!("2. Import contacts from CSV");
    println!("3. Back");
    match required(editor, "Enter your choice (1/2/3): ")?.as_str() {
        "1" => {
            let args = AddArgs {
                first_name: required(editor, "First name: ")?,
                last_name: required(editor, "Last name: ")?,
                phone_number: required(editor, "Phone number, (123) 456-7890: ")?,
                email: optional(editor, "Email address (optional): ")?,
                address: optional(editor, "Address (optional): ")?,
            };
            commands::execute_add(args, session, formatter)
        }
        "2" => {
            let file = PathBuf::from(required(editor, "Path to the CSV file: ")?);
            commands::execute_import(ImportArgs { file }, session, formatter)
        }
        "3" => Ok(()),
        other => Err(CliError::InvalidInput(format!("Unknown option '{}'", other))),
    }
}

fn search(editor: &mut LineEditor, session: &Session, formatter: &Formatter) -> Result<()> {
    println!("1. By name");
    println!("2. By phone number");
    println!("3. By creation date range");
    let mut args = SearchArgs {
        name: None,
        phone: None,
        from: None,
        to: None,
    };
    match required(editor, "Enter your choice (1/2/3): ")?.as_str() {
        "1" => args.name = Some(required(editor, "Name: ")?),
        "2" => args.phone = Some(required(editor, "Phone number: ")?),
        "3" => {
            args.from = Some(required(editor, "From (YYYY-MM-DD): ")?);
            args.to = Some(required(editor, "To (YYYY-MM-DD): ")?);
        }
        other => return Err(CliError::InvalidInput(format!("Unknown option '{}'", other))),
    }

    let found = commands::search::find(&args, session)?;
    println!("{}", formatter.format_contacts(found.iter().copied())?);
    if found.is_empty() {
        return Ok(());
    }

    if confirm(editor, "View change history?")? {
        for contact in found {
            println!("{}", formatter.format_history(contact)?);
        }
    }
    Ok(())
}

fn update(editor: &mut LineEditor, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let name = required(editor, "Name of the contact to update: ")?;
    let pick = choose(editor, session, &name)?;

    let field_input = required(editor, "Field (first/last/phone/email/address): ")?;
    let field = FieldArg::from_str(&field_input, true)
        .map_err(|_| CliError::InvalidInput(format!("Unknown field '{}'", field_input)))?;
    let value = optional(editor, "New value: ")?;

    commands::execute_update(
        UpdateArgs {
            name,
            field,
            value,
            pick,
        },
        session,
        formatter,
    )
}

fn delete(editor: &mut LineEditor, session: &mut Session, formatter: &Formatter) -> Result<()> {
    println!("1. Delete one contact");
    println!("2. Delete all contacts");
    println!("3. Back");
    match required(editor, "Enter your choice (1/2/3): ")?.as_str() {
        "1" => {
            let name = required(editor, "Name of the contact to delete: ")?;
            let pick = choose(editor, session, &name)?;
            let yes = confirm(editor, "Delete this contact?")?;
            if !yes {
                println!("{}", formatter.info("Operation cancelled"));
                return Ok(());
            }
            commands::execute_delete(DeleteArgs { name, pick, yes }, session, formatter)
        }
        "2" => {
            let yes = confirm(editor, "Delete ALL contacts?")?;
            if !yes {
                println!("{}", formatter.info("Operation cancelled"));
                return Ok(());
            }
            commands::execute_delete_all(DeleteAllArgs { yes }, session, formatter)
        }
        "3" => Ok(()),
        other => Err(CliError::InvalidInput(format!("Unknown option '{}'", other))),
    }
}

fn sort(editor: &mut LineEditor, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let key_input = required(editor, &format!("Sort by ({}): ", sort_key_names()))?;
    let key = key_input.parse::<SortKey>().map_err(CliError::InvalidInput)?;
    let order = optional(editor, "Order (asc/desc) [asc]: ")?;
    let desc = match order.to_lowercase().as_str() {
        "" | "asc" | "a" => false,
        "desc" | "d" => true,
        other => return Err(CliError::InvalidInput(format!("Unknown order '{}'", other))),
    };
    commands::execute_sort(SortArgs { key, desc }, session, formatter)
}

fn sort_key_names() -> String {
    SortKey::ALL
        .iter()
        .map(SortKey::as_str)
        .collect::<Vec<_>>()
        .join("/")
}

/// Show the matches for `name` and let the user pick one when there are several.
fn choose(editor: &mut LineEditor, session: &Session, name: &str) -> Result<Option<usize>> {
    let matches = session.directory().find_by_name(name);
    match matches.len() {
        0 => Err(CliError::NoMatch(name.to_string())),
        1 => Ok(None),
        count => {
            for (i, contact) in matches.iter().enumerate() {
                println!("{}. {}", i + 1, contact.summary());
            }
            let input = required(editor, &format!("Which one (1-{})? ", count))?;
            input
                .parse::<usize>()
                .map(Some)
                .map_err(|_| CliError::InvalidInput(format!("'{}' is not a number", input)))
        }
    }
}

fn confirm(editor: &mut LineEditor, question: &str) -> Result<bool> {
    let answer = optional(editor, &format!("{} [y/N] ", question))?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// Read a line; `None` on end of input.
fn read(editor: &mut LineEditor, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Eof) => Ok(None),
        Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
        Err(err) => Err(err.into()),
    }
}

fn optional(editor: &mut LineEditor, prompt: &str) -> Result<String> {
    Ok(read(editor, prompt)?.unwrap_or_default())
}

fn required(editor: &mut LineEditor, prompt: &str) -> Result<String> {
    let line = optional(editor, prompt)?;
    if line.is_empty() {
        return Err(CliError::InvalidInput("A value is required".to_string()));
    }
    Ok(line)
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::home_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_menu() {
    println!("Phone Book");
    println!("1. Print all contacts");
    println!("2. Create contact");
    println!("3. Search contact and view history of change");
    println!("4. Update contact");
    println!("5. Delete contact");
    println!("6. Sort contacts");
    println!("7. Group contacts");
    println!("Enter 'q' to quit.");
}
