/*
    This module generates random words of a grammar's language
*/

use std::collections::HashMap;

use itertools::Itertools;
use rand::prelude::*;
use thiserror::Error;

use crate::error_handling::*;
use crate::grammar::{Grammar, Production};

pub const DEFAULT_MAX_DEPTH: usize = 8;

#[derive(Debug, PartialEq, Error)]
pub enum GenerateErrorType {
    // The nonterminal derives no finite word
    #[error("Generate error: nonterminal `{0}` derives no finite word")]
    Unproductive(char),
}

impl ErrorType for GenerateErrorType {}

pub type GenerateError = Error<GenerateErrorType>;
pub type GenResult = Result<String, GenerateError>;

type Heights = HashMap<char, usize>;

fn production_height(production: &Production, heights: &Heights) -> Option<usize> {
    match production {
        Production::Terminal(_) => Some(1),
        Production::Pair(b, c) => Some(1 + heights.get(b)?.max(heights.get(c)?)),
    }
}

// Height of the shallowest derivation tree of each nonterminal. Nonterminals
// missing from the map are unproductive
fn min_heights(grammar: &Grammar) -> Heights {
    let mut heights = Heights::new();
    let mut changed = true;

    while changed {
        changed = false;
        for rule in grammar.rules() {
            let Some(height) = production_height(&rule.right, &heights) else {
                continue;
            };
            if heights.get(&rule.left).map_or(true, |&known| height < known) {
                heights.insert(rule.left, height);
                changed = true;
            }
        }
    }

    heights
}

struct Generator<'a, R: Rng> {
    grammar: &'a Grammar,
    heights: Heights,
    rng: &'a mut R,
}

fn unproductive(symbol: char) -> GenerateError {
    GenerateError::unlocated(GenerateErrorType::Unproductive(symbol))
}

impl<R: Rng> Generator<'_, R> {
    // Only alternatives that fit in the remaining budget are picked, which
    // always includes the shallowest one
    fn expand(&mut self, symbol: char, budget: usize, word: &mut String) -> Result<(), GenerateError> {
        let grammar = self.grammar;
        let heights = &self.heights;
        let candidates = grammar.alternatives(symbol)
            .filter(|p| production_height(p, heights).is_some_and(|h| h <= budget))
            .collect_vec();

        match candidates.choose(self.rng).map(|&&p| p) {
            Some(Production::Terminal(t)) => word.push(t),
            Some(Production::Pair(b, c)) => {
                self.expand(b, budget - 1, word)?;
                self.expand(c, budget - 1, word)?;
            }
            None => return Err(unproductive(symbol)),
        }

        return Ok(());
    }
}

/// Generates a random word derivable from the grammar's start symbol. The
/// derivation tree is at most `max_depth` deep, or as shallow as possible when
/// the start symbol needs more than that.
pub fn generate(grammar: &Grammar, max_depth: usize, rng: &mut impl Rng) -> GenResult {
    let start = grammar.start_symbol;
    let heights = min_heights(grammar);
    let budget = match heights.get(&start) {
        Some(&min) => max_depth.max(min),
        None => return Err(unproductive(start)),
    };

    let mut generator = Generator { grammar, heights, rng };
    let mut word = String::new();
    generator.expand(start, budget, &mut word)?;

    return Ok(word);
}
