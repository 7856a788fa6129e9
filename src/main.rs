mod client;
mod commands;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::Client;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "evcal")]
#[command(about = "Manage calendar events backed by the evcal server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events, grouped by start date
    List,
    /// Create a new event
    Add {
        /// Event title
        title: String,

        /// Start date (DD/MM/YYYY)
        #[arg(short, long)]
        start: String,

        /// End date (DD/MM/YYYY)
        #[arg(short, long)]
        end: String,

        /// Event type (see `evcal types`)
        #[arg(short, long)]
        category: String,
    },
    /// Change an existing event; omitted options keep their current value
    Edit {
        /// Id of the event to change
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New start date (DD/MM/YYYY)
        #[arg(long)]
        start: Option<String>,

        /// New end date (DD/MM/YYYY)
        #[arg(long)]
        end: Option<String>,

        /// New event type (see `evcal types`)
        #[arg(long)]
        category: Option<String>,
    },
    /// Remove an event
    Delete {
        /// Id of the event to remove
        id: String,
    },
    /// Show the event types and their calendar colors
    Types,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Types => commands::types::run(),
        Commands::List => {
            let session = connect_session().await?;
            commands::list::run(&session)
        }
        Commands::Add {
            title,
            start,
            end,
            category,
        } => {
            let mut session = connect_session().await?;
            commands::add::run(&mut session, title, start, end, category).await
        }
        Commands::Edit {
            id,
            title,
            start,
            end,
            category,
        } => {
            let mut session = connect_session().await?;
            commands::edit::run(&mut session, id, title, start, end, category).await
        }
        Commands::Delete { id } => {
            let mut session = connect_session().await?;
            commands::delete::run(&mut session, id).await
        }
    }
}

async fn connect_session() -> Result<Session> {
    let client = Client::connect().await?;
    Ok(Session::load(client).await)
}
