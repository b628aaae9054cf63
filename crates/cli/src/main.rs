use std::io::stdout;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, info};
use qkk_cli::cli_args::Args;
use qkk_cli::outcome;
use qkk_cli::resource_selection;
use qkk_core::config::KUBECTL;
use qkk_core::dispatch::{ActionRequest, Dispatcher};
use qkk_core::error::Result;
use qkk_core::listing;
use qkk_core::selection::{Selection, SelectionSession};

fn execute(args: &Args) -> Result<()> {
    let (resource, action) = args.validate()?;
    debug!(
        "Searching {} in `{}` with pattern `{}`",
        resource, args.namespace, args.pattern
    );

    let candidates = listing::list_candidates(KUBECTL, resource, &args.namespace, &args.pattern)?;
    let session = SelectionSession::new(candidates, resource)?;

    let Selection::Confirmed(selected) = resource_selection::prompt_for_selection(session)? else {
        info!("Selection cancelled");
        return Ok(());
    };

    let request = ActionRequest::new(
        action.to_vec(),
        resource,
        selected,
        Some(args.namespace.clone()),
    );
    let dispatcher = Dispatcher::default();

    println!("running: {}\n\n", dispatcher.describe(&request));

    if args.dry_run {
        println!("Dry run is specified, exiting without executing.");
        return Ok(());
    }

    let stdout = stdout();
    let mut output = stdout.lock();
    dispatcher.dispatch(&request, &mut output)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            print!("{e}");
            return ExitCode::FAILURE;
        }
    };

    outcome::report(execute(&args)).emit()
}
