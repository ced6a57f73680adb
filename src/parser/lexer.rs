use itertools::Itertools;

use super::{CompileErrorType, Result};

pub const ARROW: &str = "->";

// Splits a trimmed rule line into its trimmed left and right sides
pub fn split_rule_line(line: &str) -> Result<(&str, &str)> {
    match line.split(ARROW).collect_tuple::<(&str, &str)>() {
        Some((left, right)) => Ok((left.trim(), right.trim())),
        None if line.contains(ARROW) => Err(CompileErrorType::ExtraArrow(line.to_string())),
        None => Err(CompileErrorType::MissingArrow(line.to_string())),
    }
}

// Non-empty trimmed lines, numbered from 1 as they appear in the text
pub fn rule_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(num, line)| (num + 1, line))
}
