//! In-memory model of the tabular roster document.
//!
//! A `Workbook` is an ordered list of named sheets, each a sparse grid of
//! cells. The grid offers exactly the primitives the roster engine needs
//! (read cell, write cell, clear from a row downward); persistence is the
//! backend's job, so the storage technology stays swappable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell of a sheet. Legacy documents mix native date values with free
/// text in the same column; the untagged representation keeps both and lets
/// `YYYY-MM-DD` strings round-trip as dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Cell {
    Date(NaiveDate),
    Text(String),
    #[default]
    Empty,
}

impl Cell {
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Date(_) => false,
        }
    }

    /// Trimmed textual content, `None` for empty cells. Dates render in the
    /// ISO form; callers that need the display form go through
    /// `core::month::display_date`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Cell::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    None
                } else {
                    Some(t.to_string())
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }

    /// Write a cell, growing the grid as needed.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        let r = &mut self.rows[row];
        if r.len() <= col {
            r.resize(col + 1, Cell::Empty);
        }
        r[col] = value;
    }

    /// Clear every cell from `row` downward (destructive regenerate).
    pub fn clear_rows_from(&mut self, row: usize) {
        if self.rows.len() > row {
            self.rows.truncate(row);
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name == name)
    }

    /// Existing sheet, or a fresh one appended at the end.
    pub fn ensure_sheet(&mut self, name: &str) -> &mut Sheet {
        if let Some(idx) = self.sheets.iter().position(|s| s.name == name) {
            return &mut self.sheets[idx];
        }
        self.sheets.push(Sheet::new(name));
        self.sheets.last_mut().unwrap()
    }

    /// Drop any sheet with this name and insert a fresh one at position 0.
    pub fn insert_sheet_first(&mut self, name: &str) -> &mut Sheet {
        self.remove_sheet(name);
        self.sheets.insert(0, Sheet::new(name));
        &mut self.sheets[0]
    }

    pub fn remove_sheet(&mut self, name: &str) -> bool {
        let before = self.sheets.len();
        self.sheets.retain(|s| s.name != name);
        self.sheets.len() != before
    }
}
