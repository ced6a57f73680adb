use std::collections::BTreeSet;
use std::fmt::Display;

use itertools::Itertools;

pub type Cell = BTreeSet<char>;

/// Upper triangular CYK table. `cells[start][end - start]` holds the
/// nonterminals deriving `input[start..=end]`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParseTable {
    cells: Vec<Vec<Cell>>,
}

impl ParseTable {
    pub(super) fn new(len: usize) -> Self {
        ParseTable {
            cells: (0..len).map(|start| vec![Cell::new(); len - start]).collect()
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, start: usize, end: usize) -> Option<&Cell> {
        if start > end {
            return None;
        }
        self.cells.get(start)?.get(end - start)
    }

    // Each cell is written exactly once, after all of its splits are known
    pub(super) fn fill(&mut self, start: usize, end: usize, cell: Cell) {
        debug_assert!(self.cells[start][end - start].is_empty());
        self.cells[start][end - start] = cell;
    }

    pub fn render_cell(cell: &Cell) -> String {
        if cell.is_empty() {
            "-".to_string()
        } else {
            cell.iter().collect()
        }
    }
}

impl Display for ParseTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.len();
        let width = self.cells.iter()
            .flatten()
            .map(|cell| cell.len().max(1))
            .max()
            .unwrap_or(1);

        for start in 0..n {
            let row = (0..n)
                .map(|end| match self.cell(start, end) {
                    Some(cell) => format!("{:width$}", ParseTable::render_cell(cell)),
                    None => " ".repeat(width),
                })
                .join(" | ");
            writeln!(f, "{}", row.trim_end())?;
        }

        Ok(())
    }
}
