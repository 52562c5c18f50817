use api::api::start_server;

#[macro_use]
extern crate diesel;

use clap::{Parser, Subcommand};
use utils::is_server_running;

use crate::config::API_URL;
use crate::errors::BaseError;
mod api;
mod config;
mod errors;
mod models;
mod schema;
mod store;
mod todo_commands;
mod todo_list_renderer;
mod utils;

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(alias = "ls")]
    List,
    /// Create a todo, prompting for the description if omitted
    #[clap(alias = "c")]
    Create { description: Option<String> },
    Show { id: i32 },
    Complete { id: i32 },
    Incomplete { id: i32 },
    /// Replace the description of a todo
    Edit { id: i32, description: String },
    #[clap(alias = "rm")]
    Delete { id: i32 },
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = "Manage todos from command line")]
struct TodoArgs {
    #[clap(short = 's', long = "start-server")]
    start_server: bool,

    #[clap(subcommand)]
    command: Option<Commands>,
}

fn run_command(command: &Commands) -> Result<(), BaseError> {
    match command {
        Commands::List => todo_commands::list_todos(),
        Commands::Create { description } => todo_commands::create_new_todo(description.clone()),
        Commands::Show { id } => todo_commands::show_todo(*id),
        Commands::Complete { id } => todo_commands::set_todo_completed(*id, true),
        Commands::Incomplete { id } => todo_commands::set_todo_completed(*id, false),
        Commands::Edit { id, description } => todo_commands::edit_todo(*id, description.clone()),
        Commands::Delete { id } => todo_commands::delete_todo(*id),
    }
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = TodoArgs::parse();

    if args.start_server {
        if is_server_running(API_URL.as_str()).unwrap_or(false) {
            anyhow::bail!("Server already running on {}", API_URL.as_str());
        }

        println!("Starting Server on {}", API_URL.as_str());
        start_server()?;
    }

    if let Some(command) = &args.command {
        if let Err(e) = run_command(command) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod main_test {
    use super::{Commands, TodoArgs};
    use clap::Parser;

    #[test]
    fn test_parse_create_alias() {
        let args = TodoArgs::parse_from(["todo-cli", "c", "Buy milk"]);

        match args.command {
            Some(Commands::Create { description }) => {
                assert_eq!(description.as_deref(), Some("Buy milk"))
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_start_server_flag() {
        let args = TodoArgs::parse_from(["todo-cli", "-s"]);

        assert_eq!(args.start_server, true);
        assert_eq!(args.command.is_none(), true);
    }

    #[test]
    fn test_parse_edit() {
        let args = TodoArgs::parse_from(["todo-cli", "edit", "3", "Buy bread"]);

        match args.command {
            Some(Commands::Edit { id, description }) => {
                assert_eq!(id, 3);
                assert_eq!(description, "Buy bread");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
