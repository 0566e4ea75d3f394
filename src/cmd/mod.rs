//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`], [`validate`], or [`health`]. Each
//! handler lives in its own submodule.

pub mod health;
pub mod run;
pub mod validate;

use crate::cli::{Cli, Commands};
use crate::error::TemplateError;

pub async fn dispatch(cli: Cli) -> Result<(), TemplateError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(*args).await,
        Some(Commands::Validate(ref args)) => validate::execute(args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  backend-template v{version}\n\n  \
         No command provided. To get started:\n\n    \
         backend-template run                    Start the server with default configuration\n    \
         backend-template run -P dev             Start with the dev profile\n    \
         backend-template validate -P prod       Check configuration for production\n    \
         backend-template --help                 See all commands and options\n"
    );
}
