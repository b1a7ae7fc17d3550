use clap::Parser;
use timesub_core::app::{self, EXIT_ERROR};
use timesub_core::config::{self, Cli};

fn main() {
    let cli = Cli::parse();
    config::init_tracing(&cli.log_level);

    match app::run(&cli.command) {
        Ok(outcome) => {
            println!("{}", outcome.output.trim_end());
            std::process::exit(outcome.exit_code);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}
