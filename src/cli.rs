use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "portly",
    version,
    about = "Terminal port manager: list listening sockets with their owners, kill by port or PID"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show active ports (interactive TUI by default)
    List {
        /// Print entries as JSON instead of opening the TUI
        #[arg(long)]
        json: bool,

        /// Print entries as a plain table instead of opening the TUI
        #[arg(long, conflicts_with = "json")]
        plain: bool,
    },

    /// Kill processes by port or PID
    Kill {
        /// Ports to kill (comma-separated)
        #[arg(long, value_name = "PORTS")]
        port: Option<String>,

        /// PIDs to kill (comma-separated)
        #[arg(long, value_name = "PIDS")]
        pid: Option<String>,
    },
}
