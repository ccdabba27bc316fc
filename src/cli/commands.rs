use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tt", about = concat!("[/] tasktube v", env!("CARGO_PKG_VERSION"), " - your todos, one list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Session state file (local mode)
    #[arg(long = "file", global = true, default_value = "todos.json")]
    pub file: String,

    /// Base URL of a todo service (e.g. http://localhost:3000/api/v1);
    /// switches the store to remote mode
    #[arg(long = "api", global = true)]
    pub api: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List todos in a category view
    List(ListArgs),
    /// Validate a draft and create a todo
    Add(AddArgs),
    /// Flip a todo's completed flag
    Toggle(ToggleArgs),
    /// Show sidebar counts over the whole collection
    Counts,
}

#[derive(Args)]
pub struct ListArgs {
    /// home, completed, urgent, or a literal category token
    #[arg(default_value = "home")]
    pub category: String,
}

// Draft flags default to the form's initial state: empty text fields,
// priority medium, category work. Required-ness is the validator's job,
// not clap's, so all failing fields get reported together.
#[derive(Args)]
pub struct AddArgs {
    /// Todo title
    #[arg(long, default_value = "")]
    pub title: String,
    /// Longer description
    #[arg(long = "desc", default_value = "")]
    pub description: String,
    /// high, medium, or low
    #[arg(long, default_value = "medium")]
    pub priority: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long = "due", default_value = "")]
    pub due_date: String,
    /// Category token (the form offers work, personal, urgent)
    #[arg(long, default_value = "work")]
    pub category: String,
    /// Estimated time, free-form ("2h")
    #[arg(long = "time", default_value = "")]
    pub estimated_time: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Todo id
    pub id: String,
}
