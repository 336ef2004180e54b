use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogz")]
#[command(about = "A small blog server backed by a single JSON file", long_about = None)]
#[command(version = env!("BLOGZ_LONG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to read (defaults to ./blogz.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data file holding the posts (overrides config)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the blog over HTTP (default)
    #[command(alias = "s")]
    Serve {
        /// Address to bind to
        #[arg(short, long)]
        address: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create an empty data file if none exists
    Init,

    /// Show the resolved configuration
    Config,
}
