mod cli;
mod error_handling;
mod generator;
mod grammar;
mod parser;
mod recognizer;

use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli::Cli;
use error_handling::Error;
use grammar::Grammar;

const REJECTED_EXIT: u8 = 1;
const ERROR_EXIT: u8 = 2;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn print_samples(grammar: &Grammar, cli: &Cli, amount: u32) -> Result<(), Vec<String>> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..amount {
        let word = generator::generate(grammar, cli.max_depth, &mut rng)
            .map_err(|e| vec![e.to_string()])?;
        println!("{}", word);
    }

    Ok(())
}

// Returns whether every input was accepted
fn print_recognitions(grammar: &Grammar, cli: &Cli) -> Result<bool, Vec<String>> {
    let mut all_accepted = true;

    for input in &cli.inputs {
        let input = input.trim();
        let result = recognizer::recognize(grammar, input)
            .map_err(|e| vec![Error::unlocated(e).to_string()])?;

        let verdict = if result.accepted { "ACCEPTED" } else { "REJECTED" };
        println!("{}: {}", input, verdict);
        if !cli.quiet {
            println!("{}", result.table);
        }

        all_accepted &= result.accepted;
    }

    Ok(all_accepted)
}

fn run(cli: &Cli) -> Result<ExitCode, Vec<String>> {
    let grammar = parser::load_grammar(&cli.grammar)
        .map_err(|errors| {
            if let Some(first) = errors.first() {
                log::debug!("Grammar rejected at the {} stage", first.error.stage());
            }
            errors.iter().map(ToString::to_string).collect::<Vec<_>>()
        })?
        .with_start(cli.start);

    if let Some(amount) = cli.generate {
        print_samples(&grammar, cli, amount)?;
    } else if cli.inputs.is_empty() {
        println!("{}: valid CNF grammar with {} rule(s)", cli.grammar.display(), grammar.rules().len());
    }

    if print_recognitions(&grammar, cli)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(REJECTED_EXIT))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            ExitCode::from(ERROR_EXIT)
        }
    }
}
