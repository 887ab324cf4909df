//! Level module - hierarchy positions for archival components

/// Level of a component within a resource's descendant tree
///
/// ArchivesSpace uses a fixed vocabulary for hierarchy levels. Only the
/// bottom two (`File` and `Item`) carry physical folder/item instances,
/// so only those are expanded into spreadsheet rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Top-level collection record (the resource itself)
    Collection,

    /// Series within a collection
    Series,

    /// Subseries within a series
    Subseries,

    /// File-level component (typically one or more folders)
    File,

    /// Item-level component (a single physical item)
    Item,

    /// Any level outside the fixed vocabulary
    Other,
}

impl Level {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Collection => "collection",
            Level::Series => "series",
            Level::Subseries => "subseries",
            Level::File => "file",
            Level::Item => "item",
            Level::Other => "other",
        }
    }

    /// Parse a level from its API string form
    ///
    /// Matching is exact: the API reports levels in lowercase, and
    /// anything else maps to [`Level::Other`] rather than failing;
    /// components at unknown levels are simply never expanded.
    pub fn parse(s: &str) -> Self {
        match s {
            "collection" => Level::Collection,
            "series" => Level::Series,
            "subseries" => Level::Subseries,
            "file" => Level::File,
            "item" => Level::Item,
            _ => Level::Other,
        }
    }

    /// Whether components at this level are expanded into output rows
    pub fn is_expandable(&self) -> bool {
        matches!(self, Level::File | Level::Item)
    }
}

impl std::str::FromStr for Level {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
