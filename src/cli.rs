use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "neighbourly-api", version, about = "Advertisement and post API for Neighbourly")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Insert the sample community posts into the posts collection
    SeedPosts,
}

impl Cli {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Serve)
    }
}
