//! Command-line arguments for the presentation shell.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pricebook")]
#[command(about = "Render a filterable price-catalog table from a JSON document", long_about = None)]
pub struct Cli {
    /// Path to the catalog JSON document
    pub catalog: PathBuf,

    /// Free-text search; tokens are combined with AND
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Restrict to one service id ("all" for no restriction)
    #[arg(short, long, default_value = "all")]
    pub service: String,

    /// List the services that have rows, then exit
    #[arg(long)]
    pub list_services: bool,
}
