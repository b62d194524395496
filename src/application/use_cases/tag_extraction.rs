// ============================================================
// TAG EXTRACTION USE CASE
// ============================================================
// Locate tag headers at the fixed anchor rows and pull each tag's
// fixed-length data block out of the sheet grid

use std::collections::HashSet;

use tracing::debug;

use crate::domain::sheet::SheetCell;
use crate::domain::tag::{Tag, ANCHOR_ROWS, BLOCK_LEN, BLOCK_START_OFFSET};

/// Extracts tags from one parsed sheet.
///
/// Pure over the cell grid: workbook loading lives in
/// `infrastructure::excel` so this scan can be tested without fixtures.
pub struct TagExtractor;

impl TagExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan the five anchor rows for header cells and build each accepted
    /// tag's data block.
    ///
    /// Tag order is discovery order: ascending anchor row, then left to
    /// right. Duplicate names within the file are dropped, first-seen
    /// wins. A file with no qualifying headers yields an empty list.
    pub fn extract(&self, file_name: &str, grid: &[Vec<SheetCell>]) -> Vec<Tag> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut tags = Vec::new();

        for &anchor_row in ANCHOR_ROWS.iter() {
            let Some(row) = grid.get(anchor_row) else {
                continue;
            };
            for (column, cell) in row.iter().enumerate() {
                let SheetCell::Text(name) = cell else {
                    continue;
                };
                if !Tag::qualifies(name) {
                    continue;
                }
                if !seen.insert(name.clone()) {
                    debug!(
                        file = file_name,
                        tag = name.as_str(),
                        row = anchor_row,
                        column,
                        "Duplicate tag header dropped"
                    );
                    continue;
                }
                tags.push(Tag {
                    name: name.clone(),
                    anchor_row,
                    anchor_column: column,
                    values: Vec::new(),
                });
            }
        }

        for tag in &mut tags {
            tag.values = Self::read_block(grid, tag.anchor_row, tag.anchor_column);
        }

        tags
    }

    /// Read the BLOCK_LEN-value data block under one header cell.
    ///
    /// Rows past the sheet's end, or rows too short to reach the tag's
    /// column, contribute the empty string.
    fn read_block(grid: &[Vec<SheetCell>], anchor_row: usize, column: usize) -> Vec<String> {
        let start = anchor_row + BLOCK_START_OFFSET;
        (0..BLOCK_LEN)
            .map(|i| {
                grid.get(start + i)
                    .and_then(|row| row.get(column))
                    .map(|cell| cell.to_csv_value())
                    .unwrap_or_default()
            })
            .collect()
    }
}

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new()
    }
}
