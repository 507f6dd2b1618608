//! CW CLI - Campus website editor.
//!
//! Provides commands for:
//! - `serve`: Start the editing host
//! - `show`: Print the stored content document
//! - `render`: Render the page preview to HTML
//! - `set`: Replace one content field
//! - `reset`: Restore the default content
//! - `nav`: Edit the navigation menu

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{NavArgs, RenderArgs, ResetArgs, ServeArgs, SetArgs, ShowArgs};
use error::CliError;
use output::Output;

/// CW - Campus website editor.
#[derive(Parser)]
#[command(name = "cw", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the editing host.
    Serve(ServeArgs),
    /// Print the stored content document as JSON.
    Show(ShowArgs),
    /// Render the page preview to HTML.
    Render(RenderArgs),
    /// Replace the value of one content field.
    Set(SetArgs),
    /// Discard all edits and restore the default content.
    Reset(ResetArgs),
    /// Navigation menu commands.
    Nav(NavArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute())),
        Commands::Show(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Set(args) => args.execute(),
        Commands::Reset(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
