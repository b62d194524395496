// ============================================================
// WORKBOOK LOADER
// ============================================================
// Parse a workbook's first sheet into a grid of tagged cell values

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::domain::error::{AppError, Result};
use crate::domain::sheet::SheetCell;

/// Load the first sheet of a workbook as a cell grid.
///
/// The grid is indexed by absolute sheet coordinates: rows and columns
/// before the sheet's used range are padded with empties so callers can
/// address anchor rows directly. Rows may have differing lengths; a
/// missing cell is simply absent, not an error.
pub fn load_first_sheet(path: &Path) -> Result<Vec<Vec<SheetCell>>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| AppError::FileParse(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            AppError::FileParse(format!("{}: no worksheet found", path.display()))
        })?
        .map_err(|e| AppError::FileParse(format!("{}: {}", path.display(), e)))?;

    let (start_row, start_col) = match range.start() {
        Some((row, col)) => (row as usize, col as usize),
        None => return Ok(Vec::new()), // empty sheet
    };

    let mut grid: Vec<Vec<SheetCell>> = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut cells = vec![SheetCell::Empty; start_col];
        cells.extend(row.iter().map(convert_cell));
        grid.push(cells);
    }
    Ok(grid)
}

fn convert_cell(cell: &Data) -> SheetCell {
    match cell {
        Data::String(s) => SheetCell::Text(s.clone()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => SheetCell::Text(s.clone()),
        Data::Float(f) => SheetCell::Number(*f),
        Data::Int(i) => SheetCell::Number(*i as f64),
        Data::DateTime(dt) => SheetCell::Number(dt.as_f64()),
        Data::Bool(b) => SheetCell::Number(if *b { 1.0 } else { 0.0 }),
        Data::Error(_) | Data::Empty => SheetCell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell_variants() {
        assert_eq!(
            convert_cell(&Data::String("TagA".into())),
            SheetCell::Text("TagA".into())
        );
        assert_eq!(convert_cell(&Data::Float(1.5)), SheetCell::Number(1.5));
        assert_eq!(convert_cell(&Data::Int(7)), SheetCell::Number(7.0));
        assert_eq!(convert_cell(&Data::Bool(true)), SheetCell::Number(1.0));
        assert_eq!(convert_cell(&Data::Empty), SheetCell::Empty);
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let err = load_first_sheet(Path::new("does_not_exist.xlsx")).unwrap_err();
        assert!(matches!(err, AppError::FileParse(_)));
    }
}
