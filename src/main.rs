//! Entry point registered as the mailto: handler of a site-specific browser

use clap::{error::ErrorKind, Parser, Subcommand};
use mailto_webmail::{
    cli::{ComposeArgs, InspectArgs, RewriteArgs},
    init_logger_with_config,
    log_error, log_info,
    rewrite::AmpDecoding,
    utils::log_config_summary,
    RewriterConfig,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailto-webmail")]
#[command(about = "Rewrite mailto: links into Roundcube webmail compose URLs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(args_conflicts_with_subcommands = true)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The intercepted mailto: link (shorthand for `rewrite <URL>`)
    url: Option<String>,

    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Decode every &amp; entity instead of only the first
    #[arg(long, global = true)]
    decode_all_amp: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a mailto: link into a compose URL
    #[command(name = "rewrite")]
    Rewrite(RewriteArgs),

    /// Build a compose URL from a recipient list
    #[command(name = "compose")]
    Compose(ComposeArgs),

    /// Show the pieces of a mailto: link as JSON
    #[command(name = "inspect")]
    Inspect(InspectArgs),
}

/// Exit status for a command line clap refused; only help and version succeed
fn exit_code_for(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(print_err) = e.print() {
                eprintln!("Failed to print usage: {}", print_err);
            }
            std::process::exit(exit_code_for(e.kind()));
        }
    };

    let mut config = match RewriterConfig::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        config.log_level = "debug".to_string();
    } else if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if cli.decode_all_amp {
        config.decoding = AmpDecoding::All;
    }

    init_logger_with_config(&config);
    log_config_summary(&config);

    let decoding = config.decoding;
    let result = match cli.command {
        Some(Commands::Rewrite(args)) => args.execute(decoding),
        Some(Commands::Compose(args)) => args.execute(decoding),
        Some(Commands::Inspect(args)) => args.execute(decoding),
        None => match cli.url {
            Some(url) => RewriteArgs { url, open: false }.execute(decoding),
            None => {
                log_info!("💡 Use --help to see available commands");
                std::process::exit(1);
            }
        },
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log_error!("mailto-webmail failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
