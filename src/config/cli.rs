use clap::Parser;

/// The prompt loop itself takes no arguments; the only switch controls
/// log verbosity.
#[derive(Debug, Clone, Parser)]
#[command(name = "number-gate")]
#[command(about = "Prompts for a decimal number until one above 10 is entered")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
