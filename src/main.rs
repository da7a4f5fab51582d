use clap::Parser;
use number_gate::utils::logger;
use number_gate::{CliConfig, InputValidator, LineTokenizer, PromptError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("Starting number-gate prompt loop");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut validator = InputValidator::new(LineTokenizer::new(stdin.lock()), stdout.lock());

    match validator.run() {
        Ok(value) => {
            tracing::debug!("Accepted {value:.2}, exiting");
        }
        Err(PromptError::EndOfInput) => {
            tracing::error!("Input ended before an acceptable value was entered");
            eprintln!("No more input. Exiting.");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Prompt loop failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
