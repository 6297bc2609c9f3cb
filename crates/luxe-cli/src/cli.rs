use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "luxe",
    about = "Luxe Furniture catalog service and storefront tools",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the catalog HTTP server
    Serve(ServeArgs),
    /// Print the sample catalog as the storefront shows it
    Catalog(CatalogArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Start with an empty catalog
    #[arg(long)]
    pub no_seed: bool,
    /// Do not answer cross-origin requests
    #[arg(long)]
    pub no_cors: bool,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Only show this category ("All" shows everything)
    #[arg(short, long)]
    pub category: Option<String>,
}
