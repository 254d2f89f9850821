use clap::{Parser, Subcommand};

use crate::translation::Mode;
use crate::view::Projection;

#[derive(Parser, Debug)]
#[command(name = "ft")]
#[command(about = "Translate text files line by line through your own HTTP endpoint")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Base language code of the file (e.g., en-US, de-DE)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (e.g., tr, ja, pt-BR)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation mode: per-line or whole-file
    #[arg(short = 'm', long)]
    pub mode: Option<Mode>,

    /// Translation endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// View to print: original, translated or diff
    #[arg(long)]
    pub view: Option<Projection>,

    /// Prefix printed lines with line numbers
    #[arg(short = 'n', long)]
    pub line_numbers: bool,

    /// Also write the translated text to this file
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Suppress status messages and progress
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log requests and job transitions to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure default endpoint, languages and mode
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
}
