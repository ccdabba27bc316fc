use std::path::PathBuf;

use crate::api::client::TodoApi;
use crate::cli::commands::{AddArgs, Cli, Commands, ListArgs, ToggleArgs};
use crate::cli::output::*;
use crate::io::state;
use crate::model::todo::{DraftTodo, Priority};
use crate::ops::store::{StoreError, TodoStore};
use crate::ops::{aggregate, filter, validate};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let mut session = Session::open(&cli)?;

    match cli.command {
        // Read commands
        Commands::List(args) => cmd_list(&session, args, json),
        Commands::Counts => cmd_counts(&session, json),

        // Write commands
        Commands::Add(args) => cmd_add(&mut session, args, json),
        Commands::Toggle(args) => cmd_toggle(&mut session, args, json),
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// An open store plus, in local mode, the file to write back to
struct Session {
    store: TodoStore,
    state_file: Option<PathBuf>,
}

impl Session {
    /// Local mode loads the session file; remote mode pulls the initial
    /// collection from the service.
    fn open(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(ref base_url) = cli.api {
            let mut store = TodoStore::remote(TodoApi::new(base_url));
            store.refresh()?;
            Ok(Session {
                store,
                state_file: None,
            })
        } else {
            let path = PathBuf::from(&cli.file);
            let todos = state::load_todos(&path)?;
            Ok(Session {
                store: TodoStore::local(todos),
                state_file: Some(path),
            })
        }
    }

    /// Persist local-mode state. Remote mode already wrote through.
    fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref path) = self.state_file {
            state::save_todos(path, self.store.all())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(session: &Session, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let visible = filter::filter_todos(session.store.all(), &args.category);

    if json {
        let out = ListJson {
            view: args.category.clone(),
            count: visible.len(),
            todos: visible.into_iter().cloned().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for line in format_listing(&args.category, &visible) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_counts(session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let counts = aggregate::aggregate(session.store.all());

    if json {
        println!("{}", serde_json::to_string_pretty(&counts_to_json(&counts))?);
    } else {
        for line in format_counts(&counts) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(session: &mut Session, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let priority = parse_priority(&args.priority)?;
    let draft = DraftTodo {
        title: args.title,
        description: args.description,
        priority,
        due_date: args.due_date,
        category: args.category,
        estimated_time: args.estimated_time,
    };

    // Validation failures leave the collection untouched and report every
    // failing field, not just the first.
    if let Err(errors) = validate::validate(&draft) {
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&InvalidDraftJson { errors: &errors })?
            );
        } else {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
        }
        return Err(errors.to_string().into());
    }

    let created = session.store.create(draft)?.clone();
    session.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        for line in format_todo_detail(&created) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_toggle(session: &mut Session, args: ToggleArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let updated = match session.store.toggle_complete(&args.id) {
        Ok(todo) => todo.clone(),
        Err(StoreError::NotFound(id)) => {
            return Err(format!("todo not found: {}", id).into());
        }
        Err(e) => return Err(e.into()),
    };
    session.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!("{}", format_todo_line(&updated));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_priority(s: &str) -> Result<Priority, String> {
    Priority::from_label(s).ok_or_else(|| format!("invalid priority '{}' (use high, medium, or low)", s))
}
