use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use file_translator::cli::commands::{configure, translate};
use file_translator::cli::{Args, Command};
use file_translator::output::{self, OutputConfig};
use file_translator::translation::print_languages;

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "file_translator=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!output::is_no_color())
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || defaults.no_color,
    });
    init_tracing(args.verbose);

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
                mode: args.mode,
                endpoint: args.endpoint,
                view: args.view,
                line_numbers: args.line_numbers,
                output: args.output,
            };
            let code = translate::run_translate(options).await?;
            if code != exitcode::OK {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
