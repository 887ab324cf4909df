//! Row module - the unit written to the output spreadsheet

use std::fmt;

/// Folder/Item value for one output row
///
/// Expansion of a range or list yields concrete numbers. A single value
/// is kept as the raw string to preserve its original formatting, and an
/// instance with no `indicator_2` at all yields [`FolderItem::Absent`],
/// which renders as an empty CSV field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderItem {
    /// A concrete folder/item number from an expanded range or list
    Number(u32),

    /// A single value carried through verbatim
    Text(String),

    /// No folder/item number on the instance
    Absent,
}

impl fmt::Display for FolderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderItem::Number(n) => write!(f, "{}", n),
            FolderItem::Text(s) => write!(f, "{}", s),
            FolderItem::Absent => Ok(()),
        }
    }
}

/// One line of the digitization-tracking spreadsheet
///
/// Every row derived from the same instance shares its box number, and
/// every row derived from the same archival object shares its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Resolved top-container indicator (the box number or label)
    pub box_number: String,

    /// Folder/item number within the box
    pub folder_item: FolderItem,

    /// Title inherited from the owning archival object
    pub title: String,
}

impl Row {
    /// Create a new row
    pub fn new(box_number: impl Into<String>, folder_item: FolderItem, title: impl Into<String>) -> Self {
        Self {
            box_number: box_number.into(),
            folder_item,
            title: title.into(),
        }
    }
}
