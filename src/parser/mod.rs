/*
    This module compiles `LHS -> RHS` rule text into CNF grammars
*/

pub mod lexer;
pub mod verifier;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use itertools::{Either, Itertools};
use thiserror::Error;

use crate::error_handling::*;
use crate::grammar::Grammar;

// Grammar path standing for standard input
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum CompileErrorType {
    // A rule line has no `->`
    #[error("Parse error: expected `->` in rule `{0}`")]
    MissingArrow(String),
    // A rule line has more than one `->`
    #[error("Parse error: more than one `->` in rule `{0}`")]
    ExtraArrow(String),
    // The left side is not a single uppercase letter
    #[error("CNF error: left side must be a single nonterminal in rule `{0}`")]
    BadLeft(String),
    // The right side is neither one terminal nor two nonterminals
    #[error("CNF error: right side must be one terminal or two nonterminals in rule `{0}`")]
    BadRight(String),
    // A nonterminal is used but never appears on a left side
    #[error("CNF error: nonterminal `{0}` is used but never defined")]
    UndefinedSymbol(char),
    // There was an issue with reading a file
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
}

impl CompileErrorType {
    pub fn stage(&self) -> &'static str {
        match self {
            CompileErrorType::MissingArrow(_) | CompileErrorType::ExtraArrow(_) => "parse",
            CompileErrorType::BadLeft(_)
            | CompileErrorType::BadRight(_)
            | CompileErrorType::UndefinedSymbol(_) => "cnf",
            CompileErrorType::FileError(_) => "io",
        }
    }
}

impl ErrorType for CompileErrorType {}

impl PartialEq for CompileErrorType {
    fn eq(&self, other: &Self) -> bool {
        use CompileErrorType::*;
        match (self, other) {
            (MissingArrow(a), MissingArrow(b))
            | (ExtraArrow(a), ExtraArrow(b))
            | (BadLeft(a), BadLeft(b))
            | (BadRight(a), BadRight(b)) => a == b,
            (UndefinedSymbol(a), UndefinedSymbol(b)) => a == b,
            (FileError(a), FileError(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

pub type CompileError = Error<CompileErrorType>;
pub type CompileErrors = Errors<CompileErrorType>;

pub type Result<T> = std::result::Result<T, CompileErrorType>;
pub type FileResult<T> = std::result::Result<T, CompileErrors>;

fn io_error(error: std::io::Error, file: PathBuf) -> CompileError {
    CompileError {
        location: Location {
            file,
            line: 0
        },
        error: CompileErrorType::FileError(error)
    }
}

// A syntactically well formed rule whose shape has not been checked yet
#[derive(PartialEq, Debug, Clone)]
pub struct RawRule {
    pub left: String,
    pub right: String,
    pub location: Location
}

impl RawRule {
    pub fn text(&self) -> String {
        format!("{} {} {}", self.left, lexer::ARROW, self.right)
    }
}

fn parse_line(line: &str, location: Location) -> std::result::Result<RawRule, CompileError> {
    match lexer::split_rule_line(line) {
        Ok((left, right)) => Ok(RawRule {
            left: left.to_string(),
            right: right.to_string(),
            location
        }),
        Err(error) => Err(CompileError { location, error }),
    }
}

fn compile_with_file(text: &str, file: &Path) -> FileResult<Vec<RawRule>> {
    let (rules, errors): (Vec<_>, Vec<_>) = lexer::rule_lines(text)
        .map(|(num, line)| parse_line(line, Location {
            file: file.to_path_buf(),
            line: num
        }))
        .partition_map(|parsed| match parsed {
            Ok(rule) => Either::Left(rule),
            Err(error) => Either::Right(error),
        });

    if !errors.is_empty() {
        return Err(errors);
    }

    log::debug!("Compiled {} rule(s)", rules.len());
    return Ok(rules);
}

/// Splits grammar text into `(left, right)` rule pairs in the order they were
/// written. Every malformed line is reported, not just the first.
pub fn compile(text: &str) -> FileResult<Vec<RawRule>> {
    compile_with_file(text, Path::new(""))
}

// Reads grammar text from standard input
pub fn compile_stdin() -> FileResult<Vec<RawRule>> {
    let text = io::read_to_string(io::stdin())
        .map_err(|e| vec![io_error(e, PathBuf::from(STDIN_PATH))])?;
    compile(&text)
}

pub fn compile_file(path: &Path) -> FileResult<Vec<RawRule>> {
    let text = fs::read_to_string(path).map_err(|e| vec![io_error(e, path.to_path_buf())])?;
    compile_with_file(&text, path)
}

pub fn load_grammar(path: &Path) -> FileResult<Grammar> {
    let rules = if path == Path::new(STDIN_PATH) {
        compile_stdin()?
    } else {
        compile_file(path)?
    };
    verifier::validate(&rules)
}
