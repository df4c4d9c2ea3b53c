use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command()]
pub struct Args {
    /// Path to the JSON data file
    #[arg(long, global = true, default_value = "test-data.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the grandfathers who share a name with one of their grandchildren
    Find,
    /// Create a random data file
    CreateFile {
        /// The number of root persons in the file
        number_people: u32,
    },
}
