// ============================================================
// SHEET CELL TYPES
// ============================================================
// Tagged cell values read from a workbook's first sheet

use serde::{Deserialize, Serialize};

/// A single cell value from a parsed sheet.
///
/// Only the `Text` variant can qualify as a tag header; everything the
/// workbook parser cannot represent as text or a number collapses to
/// `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SheetCell {
    Text(String),
    Number(f64),
    Empty,
}

impl SheetCell {
    /// Render this cell as a CSV field value.
    ///
    /// Integral numbers are printed without a trailing `.0` so that cells
    /// the spreadsheet stored as floats round-trip the way they display.
    pub fn to_csv_value(&self) -> String {
        match self {
            SheetCell::Text(s) => s.clone(),
            SheetCell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            SheetCell::Empty => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_renders_verbatim() {
        assert_eq!(SheetCell::Text("FIC_101.PV".into()).to_csv_value(), "FIC_101.PV");
    }

    #[test]
    fn test_integral_number_drops_fraction() {
        assert_eq!(SheetCell::Number(42.0).to_csv_value(), "42");
        assert_eq!(SheetCell::Number(-7.0).to_csv_value(), "-7");
    }

    #[test]
    fn test_fractional_number_keeps_fraction() {
        assert_eq!(SheetCell::Number(3.25).to_csv_value(), "3.25");
    }

    #[test]
    fn test_empty_renders_empty() {
        assert_eq!(SheetCell::Empty.to_csv_value(), "");
    }
}
