// ============================================================
// TAG TYPES
// ============================================================
// Data structures representing extracted SCADA tag time series

use serde::{Deserialize, Serialize};

/// Row offsets (0-based) at which tag header cells are expected.
pub const ANCHOR_ROWS: [usize; 5] = [2, 2002, 4002, 6002, 8002];

/// Number of data rows in each tag's time-series block.
pub const BLOCK_LEN: usize = 1440;

/// Offset from a tag's anchor row to the first row of its data block.
pub const BLOCK_START_OFFSET: usize = 3;

/// Substring marking a placeholder header cell; such cells never become tags.
pub const PLACEHOLDER: &str = "DUMMY";

/// One named time series found in one workbook file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Header cell text (unique within its file)
    pub name: String,

    /// Anchor row (0-based) where the header was found
    pub anchor_row: usize,

    /// Column (0-based) where the header was found
    pub anchor_column: usize,

    /// Exactly BLOCK_LEN values; empty string where the sheet had no cell
    pub values: Vec<String>,
}

impl Tag {
    /// Check whether a header cell value qualifies as a tag name.
    pub fn qualifies(name: &str) -> bool {
        !name.is_empty() && !name.contains(PLACEHOLDER)
    }
}

/// All tags extracted from a single workbook file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTags {
    pub file_name: String,
    pub tags: Vec<Tag>,
}

/// One flattened CSV row: a single timestep of a single tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    pub file_name: String,
    pub tag_name: String,

    /// 1-based timestep within the tag's data block
    pub row_index: usize,

    /// 1-based column of the tag's header cell
    pub column_index: usize,

    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifies_rejects_empty_and_placeholder() {
        assert!(Tag::qualifies("FIC_101.PV"));
        assert!(!Tag::qualifies(""));
        assert!(!Tag::qualifies("DUMMY"));
        assert!(!Tag::qualifies("DUMMY_X"));
        assert!(!Tag::qualifies("PRE_DUMMY_POST"));
    }

    #[test]
    fn test_qualifies_is_case_sensitive() {
        // Only the exact uppercase marker is a placeholder
        assert!(Tag::qualifies("dummy_tag"));
    }
}
