use crate::utils::locale::{format_float, parse_locale_float};
use std::fmt;

/// A single value of a loaded sheet
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    /// Blank field or a value that could not be coerced
    Empty,
}

impl Cell {
    /// Build a cell from raw text; empty text becomes `Cell::Empty`
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Comparison key: trimmed, lowercased, empty for missing values
    pub fn normalized_key(&self) -> String {
        match self {
            Cell::Text(text) => text.trim().to_lowercase(),
            Cell::Number(value) => format_float(*value),
            Cell::Empty => String::new(),
        }
    }

    /// Convert a comma-decimal text cell into a number, or `Empty` if it does not parse
    pub fn coerce_locale_number(self) -> Self {
        match self {
            Cell::Text(text) => parse_locale_float(&text).map_or(Cell::Empty, Cell::Number),
            other => other,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => write!(f, "{}", text),
            Cell::Number(value) => write!(f, "{}", format_float(*value)),
            Cell::Empty => Ok(()),
        }
    }
}

/// One row of a dataset, positionally aligned with the dataset's columns
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    cells: Vec<Cell>,
}

impl Record {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    fn project(&self, indices: &[usize]) -> Self {
        let cells = indices
            .iter()
            .map(|&i| self.cells.get(i).cloned().unwrap_or(Cell::Empty))
            .collect();
        Self { cells }
    }
}

/// Ordered column names plus the records loaded from one file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value of `column` in row `row`
    pub fn value(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.records.get(row)?.get(index)
    }

    /// All values of one column, in row order
    pub fn column_values(&self, column: &str) -> Vec<&Cell> {
        match self.column_index(column) {
            Some(index) => self
                .records
                .iter()
                .filter_map(|record| record.get(index))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn rename_columns<F>(&mut self, mut rename: F)
    where
        F: FnMut(&str) -> String,
    {
        for column in &mut self.columns {
            *column = rename(column);
        }
    }

    /// Keep only the columns at `indices`, in that order
    pub fn select_columns(&self, indices: &[usize]) -> Dataset {
        let columns = indices
            .iter()
            .filter_map(|&i| self.columns.get(i).cloned())
            .collect();
        let records = self
            .records
            .iter()
            .map(|record| record.project(indices))
            .collect();

        Dataset { columns, records }
    }

    pub fn retain_records<F>(&mut self, keep: F)
    where
        F: FnMut(&Record) -> bool,
    {
        self.records.retain(keep);
    }

    /// Apply `f` to every cell of column `index`
    pub fn map_column<F>(&mut self, index: usize, mut f: F)
    where
        F: FnMut(Cell) -> Cell,
    {
        for record in &mut self.records {
            if let Some(cell) = record.get_mut(index) {
                let value = std::mem::replace(cell, Cell::Empty);
                *cell = f(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![
                Record::new(vec![Cell::from_raw("1"), Cell::from_raw("x"), Cell::from_raw("")]),
                Record::new(vec![Cell::from_raw("2"), Cell::from_raw("y"), Cell::from_raw("z")]),
            ],
        )
    }

    #[test]
    fn test_cell_from_raw() {
        assert_eq!(Cell::from_raw(""), Cell::Empty);
        assert_eq!(Cell::from_raw(" "), Cell::Text(" ".to_string()));
    }

    #[test]
    fn test_normalized_key() {
        assert_eq!(Cell::Text("  Metropolitana de SANTIAGO ".into()).normalized_key(), "metropolitana de santiago");
        assert_eq!(Cell::Empty.normalized_key(), "");
    }

    #[test]
    fn test_coerce_locale_number() {
        assert_eq!(Cell::Text("33,5".into()).coerce_locale_number(), Cell::Number(33.5));
        assert_eq!(Cell::Text("abc".into()).coerce_locale_number(), Cell::Empty);
        assert_eq!(Cell::Number(2.5).coerce_locale_number(), Cell::Number(2.5));
        assert_eq!(Cell::Empty.coerce_locale_number(), Cell::Empty);
    }

    #[test]
    fn test_value_lookup() {
        let dataset = sample();
        assert_eq!(dataset.value(1, "b"), Some(&Cell::Text("y".into())));
        assert_eq!(dataset.value(0, "c"), Some(&Cell::Empty));
        assert_eq!(dataset.value(0, "missing"), None);
        assert_eq!(dataset.value(5, "a"), None);
    }

    #[test]
    fn test_select_columns() {
        let dataset = sample().select_columns(&[2, 0]);
        assert_eq!(dataset.columns(), &["c".to_string(), "a".to_string()]);
        assert_eq!(dataset.records()[1].cells(), &[Cell::Text("z".into()), Cell::Text("2".into())]);
    }

    #[test]
    fn test_retain_and_map() {
        let mut dataset = sample();
        dataset.retain_records(|r| r.get(1) == Some(&Cell::Text("y".into())));
        assert_eq!(dataset.len(), 1);

        dataset.map_column(0, |_| Cell::Number(7.0));
        assert_eq!(dataset.value(0, "a"), Some(&Cell::Number(7.0)));
    }
}
