mod args;
mod config;
mod error;
mod paths;

use std::process::ExitCode;

use clap::Parser;
use mdl::components::Textfield;
use mdldom::{to_html, to_html_pretty};

use args::Cli;
use config::LogConfig;
use error::CliError;

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut log_config = LogConfig::default().level(cli.log_level);
    if let Some(file) = &cli.log_file {
        log_config = log_config.file(file);
    }
    log_config.init()?;

    let textfield = Textfield::from(config::load_props(cli.input_path().map(|p| p.as_path()))?);
    let element = textfield.build();

    if cli.validity {
        eprintln!("{}", textfield.state().validity);
    }

    if cli.pretty {
        print!("{}", to_html_pretty(&element));
    } else {
        println!("{}", to_html(&element));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
