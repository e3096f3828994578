mod cli;
mod commands;
mod formatting;
mod logging;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_audit_command, run_classify};

fn main() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let args = cli::parse();
    logging::init_logging(args.verbose);

    match args.command {
        Commands::Audit {
            input,
            ignore_selectors,
            include_hidden,
            text_only,
            fail_on_incomplete,
            format,
            output,
        } => run_audit_command(
            &raw_args,
            args.config,
            input,
            ignore_selectors,
            include_hidden,
            text_only,
            fail_on_incomplete,
            format,
            output,
        ),
        Commands::Classify {
            value,
            tag,
            format,
            output,
        } => run_classify(value, tag, format, output),
    }
}
