use std::collections::HashSet;

use itertools::Itertools;

use crate::grammar::{Grammar, Production, Rule, Symbol};
use super::CompileErrorType::{BadLeft, BadRight, UndefinedSymbol};
use super::{CompileError, CompileErrors, CompileErrorType, FileResult, RawRule};

fn check_left(left: &str) -> Option<char> {
    left.chars()
        .exactly_one()
        .ok()
        .filter(|&c| Symbol::is_nonterminal(c))
}

fn check_right(right: &str) -> Option<Production> {
    let chars = right.chars().collect_vec();
    match chars[..] {
        [a] if Symbol::is_terminal(a) => Some(Production::Terminal(a)),
        [b, c] if Symbol::is_nonterminal(b) && Symbol::is_nonterminal(c) => Some(Production::Pair(b, c)),
        _ => None,
    }
}

// Checks one rule's shape, left side first
fn check_shape(rule: &RawRule) -> Result<Rule, CompileError> {
    let error = |kind: fn(String) -> CompileErrorType| CompileError {
        location: rule.location.clone(),
        error: kind(rule.text())
    };

    let left = check_left(&rule.left).ok_or_else(|| error(BadLeft))?;
    let right = check_right(&rule.right).ok_or_else(|| error(BadRight))?;

    return Ok(Rule { left, right });
}

fn get_undefined_symbols(rules: &[Rule], raw_rules: &[RawRule]) -> CompileErrors {
    let defined: HashSet<char> = rules.iter().map(|rule| rule.left).collect();

    // Each undefined nonterminal is reported once per rule using it
    rules.iter()
        .zip(raw_rules)
        .flat_map(|(rule, raw)| rule.right
            .nonterminals()
            .unique()
            .filter(|symbol| !defined.contains(symbol))
            .map(|symbol| CompileError {
                location: raw.location.clone(),
                error: UndefinedSymbol(symbol)
            })
            .collect_vec())
        .collect()
}

/// Checks every rule for CNF shape, then checks that every nonterminal used on
/// a right side is defined somewhere. The closure check only runs once all
/// rules are well shaped, since it needs the complete set of left sides.
pub fn validate(raw_rules: &[RawRule]) -> FileResult<Grammar> {
    let (rules, errors): (Vec<_>, Vec<_>) = raw_rules.iter()
        .map(check_shape)
        .partition_result();

    if !errors.is_empty() {
        return Err(errors);
    }

    let errors = get_undefined_symbols(&rules, raw_rules);
    if !errors.is_empty() {
        return Err(errors);
    }

    log::debug!("Validated {} rule(s)", rules.len());
    return Ok(Grammar::new(rules));
}
