//! Single-row tabular frame handed to the preprocessor.

use crate::error::MalformedRecordError;
use crate::types::record::NormalizedRecord;

/// Column order expected by the fitted preprocessor.
pub const COLUMN_ORDER: [&str; 7] = [
    "gender",
    "race_ethnicity",
    "parental_level_of_education",
    "lunch",
    "test_preparation_course",
    "reading_score",
    "writing_score",
];

/// One cell of the frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

/// A single-row, seven-column table in the fixed column order.
///
/// Invariant: exactly one row, no null cells. Enforced by the null scan in
/// [`TabularFrame::from_record`].
#[derive(Debug, Clone, PartialEq)]
pub struct TabularFrame {
    cells: Vec<Cell>,
}

impl TabularFrame {
    /// Assemble the frame from a normalized record.
    ///
    /// Every cell slot is filled and then scanned; an unfilled slot or a
    /// non-finite score fails with [`MalformedRecordError`]. Given the
    /// record builder's guarantees the only reachable failure is a
    /// non-finite score passed through normalization.
    pub fn from_record(record: &NormalizedRecord) -> Result<Self, MalformedRecordError> {
        let slots: [Option<Cell>; 7] = [
            Some(Cell::Text(record.gender.clone())),
            Some(Cell::Text(record.race_ethnicity.clone())),
            Some(Cell::Text(record.parental_level_of_education.clone())),
            Some(Cell::Text(record.lunch.clone())),
            Some(Cell::Text(record.test_preparation_course.clone())),
            Some(Cell::Number(record.reading_score)),
            Some(Cell::Number(record.writing_score)),
        ];

        let mut cells = Vec::with_capacity(COLUMN_ORDER.len());
        for (slot, column) in slots.into_iter().zip(COLUMN_ORDER) {
            match slot {
                Some(Cell::Number(n)) if !n.is_finite() => {
                    return Err(MalformedRecordError { column })
                }
                Some(cell) => cells.push(cell),
                None => return Err(MalformedRecordError { column }),
            }
        }

        Ok(Self { cells })
    }

    /// Always 1: the frame holds a single record.
    pub fn row_count(&self) -> usize {
        1
    }

    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    /// Column names in order.
    pub fn columns(&self) -> &'static [&'static str; 7] {
        &COLUMN_ORDER
    }

    /// Cells in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell for a named column.
    pub fn cell(&self, column: &str) -> Option<&Cell> {
        COLUMN_ORDER
            .iter()
            .position(|c| *c == column)
            .map(|i| &self.cells[i])
    }
}
