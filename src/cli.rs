use std::path::PathBuf;

use clap::Parser;

use crate::generator::DEFAULT_MAX_DEPTH;
use crate::grammar::{Symbol, DEFAULT_START_SYMBOL};

#[derive(Parser, Debug)]
#[command(version, about = "Decides membership in a CNF grammar's language with the CYK algorithm")]
pub struct Cli {
    /// File containing the grammar, one `LHS -> RHS` rule per line (`-` reads standard input)
    pub grammar: PathBuf,

    /// Strings to recognize, each checked against the whole grammar
    pub inputs: Vec<String>,

    /// Start symbol
    #[arg(short, long, value_name = "SYMBOL", default_value_t = DEFAULT_START_SYMBOL, value_parser = parse_nonterminal)]
    pub start: char,

    /// Amount of random words of the language to print
    #[arg(short, long, value_name = "AMOUNT")]
    pub generate: Option<u32>,

    /// Deepest derivation tree used when generating
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Seed for generating, random when absent
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Only print whether each input is accepted
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_nonterminal(text: &str) -> Result<char, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if Symbol::is_nonterminal(c) => Ok(c),
        _ => Err(format!("`{}` is not a single uppercase nonterminal", text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["cyk", "g.cnf", "ab", "ba"]).unwrap();

        assert_eq!(cli.grammar, PathBuf::from("g.cnf"));
        assert_eq!(cli.inputs, vec!["ab".to_string(), "ba".to_string()]);
        assert_eq!(cli.start, 'S');
        assert_eq!(cli.generate, None);
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_start_symbol() {
        let cli = Cli::try_parse_from(["cyk", "g.cnf", "--start", "E"]).unwrap();
        assert_eq!(cli.start, 'E');

        assert!(Cli::try_parse_from(["cyk", "g.cnf", "-s", "e"]).is_err());
        assert!(Cli::try_parse_from(["cyk", "g.cnf", "-s", "EF"]).is_err());
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
