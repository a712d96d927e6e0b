use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "askdocs")]
#[command(author, version, about = "Ask questions of a document Q&A backend")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backend base URL (overrides config and BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .askdocs/config.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Check whether the backend is up and ready
    Status,

    /// Ask a single question and print the answer
    Ask {
        /// The question; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Interactive session: Enter submits, a trailing backslash continues the line
    Chat,

    /// Run the relay that forwards /health and /ask to the backend
    Serve {
        /// Port to listen on (default: relay.port from config, 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },
}
