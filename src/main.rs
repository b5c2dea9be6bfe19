mod api;

use clap::{Parser, Subcommand};
use witaj_core::config;
use witaj_core::greeting::HelloService;
use witaj_store::Store;

#[derive(Parser)]
#[command(name = "witaj", version, about = "Localized greeting and todo backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server.
    Serve,
    /// Print a greeting.
    Greet {
        /// Name to greet; falls back to a default when omitted.
        #[arg(long)]
        name: Option<String>,
        /// Language id as text; malformed values fall back silently.
        #[arg(long)]
        lang: Option<String>,
    },
    /// Manage the todo list.
    #[command(subcommand)]
    Todo(TodoCommands),
}

#[derive(Subcommand)]
enum TodoCommands {
    /// List all todos.
    List,
    /// Add a todo.
    Add {
        /// The todo description.
        #[arg(trailing_var_arg = true, required = true)]
        description: Vec<String>,
    },
    /// Flip the done flag of a todo.
    Toggle {
        /// The todo id.
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = config::load(&cli.config)?;
    let store = Store::new(&cfg.store).await?;

    match cli.command {
        Commands::Serve => {
            println!(
                "witaj — serving on http://{}:{}",
                cfg.server.host, cfg.server.port
            );
            api::serve(&cfg.server, api::ApiState::new(store)).await?;
        }
        Commands::Greet { name, lang } => {
            let service = HelloService::new(store);
            let greeting = service
                .prepare_greeting(name.as_deref(), lang.as_deref())
                .await?;
            println!("{greeting}");
        }
        Commands::Todo(cmd) => match cmd {
            TodoCommands::List => {
                let todos = store.find_all_todos().await?;
                if todos.is_empty() {
                    println!("No todos.");
                }
                for todo in todos {
                    let mark = if todo.done { "x" } else { " " };
                    println!("[{mark}] {:>4}  {}", todo.id, todo.description);
                }
            }
            TodoCommands::Add { description } => {
                let todo = store.add_todo(&description.join(" ")).await?;
                println!("Added todo {}: {}", todo.id, todo.description);
            }
            TodoCommands::Toggle { id } => {
                let todo = store.toggle_todo(id).await?;
                let state = if todo.done { "done" } else { "open" };
                println!("Todo {} is now {state}: {}", todo.id, todo.description);
            }
        },
    }

    Ok(())
}
