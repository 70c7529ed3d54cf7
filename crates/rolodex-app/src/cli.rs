use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};
use rolodex_core::constants::APP_NAME;
use rolodex_rfc::rfc::vcard::TypeParameter;

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = APP_NAME, version, about = "Read, check and write vCard 4.0 files")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a card and report its validity and warnings
    Check {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a card and print it re-serialized
    Normalize {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Build a card from values and print it
    New(NewArgs),
}

#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Formatted name
    #[arg(long = "fn", value_name = "NAME")]
    pub formatted_name: String,

    /// Email address; may be repeated
    #[arg(long)]
    pub email: Vec<String>,

    /// Telephone number; may be repeated
    #[arg(long)]
    pub tel: Vec<String>,

    /// TYPE applied to every telephone, e.g. `cell`; may be repeated
    #[arg(long = "tel-type", value_name = "TYPE", value_parser = parse_type_parameter)]
    pub tel_types: Vec<TypeParameter>,

    /// Free-text note
    #[arg(long)]
    pub note: Option<String>,
}

fn parse_type_parameter(s: &str) -> Result<TypeParameter, String> {
    TypeParameter::from_name(s).ok_or_else(|| format!("unknown TYPE value: {s}"))
}
