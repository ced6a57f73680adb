/*
    This module decides membership with the CYK algorithm
*/

mod table;

use itertools::iproduct;
use thiserror::Error;

use crate::error_handling::ErrorType;
use crate::grammar::{Grammar, Production};
pub use table::{Cell, ParseTable};

#[derive(Debug, PartialEq, Error)]
pub enum InputErrorType {
    // Empty derivations are not modelled
    #[error("Input error: input string cannot be empty")]
    Empty,
}

impl ErrorType for InputErrorType {}

#[derive(Debug, PartialEq, Clone)]
pub struct Recognition {
    pub table: ParseTable,
    pub accepted: bool,
}

fn base_cell(grammar: &Grammar, terminal: char) -> Cell {
    match grammar.producers(&Production::Terminal(terminal)) {
        Some(producers) => producers.clone(),
        None => {
            log::warn!("No rule produces `{}`", terminal);
            Cell::new()
        }
    }
}

// Unions the producers of every (A, B) pair over every split of the span
fn span_cell(grammar: &Grammar, table: &ParseTable, start: usize, end: usize) -> Cell {
    let mut cell = Cell::new();
    for split in start..end {
        let (Some(left), Some(right)) = (table.cell(start, split), table.cell(split + 1, end)) else {
            continue;
        };
        for (&a, &b) in iproduct!(left, right) {
            if let Some(producers) = grammar.producers(&Production::Pair(a, b)) {
                cell.extend(producers);
            }
        }
    }
    cell
}

/// Builds the full CYK table for `input` and checks whether the grammar's
/// start symbol derives the whole of it. Each call owns its table, so one
/// grammar can serve any number of calls, including concurrent ones.
pub fn recognize(grammar: &Grammar, input: &str) -> Result<Recognition, InputErrorType> {
    let symbols: Vec<char> = input.chars().collect();
    let n = symbols.len();
    if n == 0 {
        return Err(InputErrorType::Empty);
    }

    log::debug!("Building {n}x{n} table for `{input}`");
    let mut table = ParseTable::new(n);

    for (i, &terminal) in symbols.iter().enumerate() {
        table.fill(i, i, base_cell(grammar, terminal));
    }

    for len in 2..=n {
        for start in 0..=n - len {
            let end = start + len - 1;
            let cell = span_cell(grammar, &table, start, end);
            table.fill(start, end, cell);
        }
    }

    let accepted = table.cell(0, n - 1)
        .is_some_and(|cell| cell.contains(&grammar.start_symbol));

    return Ok(Recognition { table, accepted });
}
