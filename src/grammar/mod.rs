/*
    This module is for storing and querying grammars in Chomsky Normal Form
*/

use std::collections::{BTreeSet, HashMap};

pub const DEFAULT_START_SYMBOL: char = 'S';

// The base unit in a grammar rule. The class is decided by case alone
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    Terminal(char),
    Nonterminal(char),
}

impl Symbol {
    pub fn classify(c: char) -> Option<Symbol> {
        if c.is_lowercase() {
            Some(Symbol::Terminal(c))
        } else if c.is_uppercase() {
            Some(Symbol::Nonterminal(c))
        } else {
            None
        }
    }

    pub fn is_nonterminal(c: char) -> bool {
        matches!(Symbol::classify(c), Some(Symbol::Nonterminal(_)))
    }

    pub fn is_terminal(c: char) -> bool {
        matches!(Symbol::classify(c), Some(Symbol::Terminal(_)))
    }
}

// The right side of a CNF rule. Doubles as the key of the reverse index
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Production {
    Terminal(char),
    Pair(char, char),
}

impl Production {
    pub fn nonterminals(&self) -> impl Iterator<Item = char> {
        let pair = match *self {
            Production::Terminal(_) => None,
            Production::Pair(b, c) => Some([b, c]),
        };
        pair.into_iter().flatten()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rule {
    pub left: char,
    pub right: Production,
}

/// A validated CNF grammar. Only the verifier builds one, so every rule is
/// well shaped and every nonterminal on a right side has a definition.
/// Nothing mutates it afterwards, which lets several recognitions share it.
#[derive(Debug, PartialEq, Clone)]
pub struct Grammar {
    pub start_symbol: char,
    rules: Vec<Rule>,
    // right side -> every left side producing it
    index: HashMap<Production, BTreeSet<char>>,
}

impl Grammar {
    pub(crate) fn new(rules: Vec<Rule>) -> Self {
        let mut index: HashMap<Production, BTreeSet<char>> = HashMap::new();
        for rule in &rules {
            index.entry(rule.right).or_default().insert(rule.left);
        }

        Grammar {
            start_symbol: DEFAULT_START_SYMBOL,
            rules,
            index
        }
    }

    pub fn with_start(mut self, start_symbol: char) -> Self {
        if !self.defines(start_symbol) {
            log::warn!("Start symbol `{}` has no rules, nothing will be accepted", start_symbol);
        }
        self.start_symbol = start_symbol;
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn producers(&self, right: &Production) -> Option<&BTreeSet<char>> {
        self.index.get(right)
    }

    pub fn alternatives(&self, left: char) -> impl Iterator<Item = &Production> {
        self.rules.iter()
            .filter(move |rule| rule.left == left)
            .map(|rule| &rule.right)
    }

    pub fn defines(&self, left: char) -> bool {
        self.rules.iter().any(|rule| rule.left == left)
    }
}
