use std::{io, process::ExitCode};

use clap::Parser;

use sd_prompter::{InvokerBox, cli::Cli, invoke::Ollama, session::Session};

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let invoker: InvokerBox = Box::new(Ollama::new(cli.model));
    let mut session = Session::new(invoker, cli.output);

    let result = {
        let mut out = io::stdout().lock();
        if cli.files.is_empty() {
            session.run_interactive(io::stdin().lock(), &mut out)
        } else {
            session.run_batch(&cli.files, &mut out)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // failures are part of the program's stdout contract
            println!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
