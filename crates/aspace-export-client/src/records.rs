//! Wire types for the ArchivesSpace record payloads the export reads.

use aspace_export_domain::Level;
use serde::Deserialize;

/// Reference to another record, as embedded in API payloads
#[derive(Debug, Clone, Deserialize)]
pub struct RecordRef {
    /// URI of the referenced record
    #[serde(rename = "ref")]
    pub uri: String,
}

/// Response body of a resource's `ordered_records` endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct OrderedRecords {
    /// Descendant components in document order
    pub uris: Vec<ComponentRef>,
}

/// One component reference from the ordered descendant list
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentRef {
    /// URI of the component's full record
    #[serde(rename = "ref")]
    pub uri: String,

    /// Hierarchy level as the API reports it
    pub level: String,

    /// Display string for the component, when provided
    #[serde(default)]
    pub display_string: Option<String>,

    /// Depth within the resource tree, when provided
    #[serde(default)]
    pub depth: Option<u32>,
}

impl ComponentRef {
    /// Parse the reported level into the domain vocabulary
    pub fn level(&self) -> Level {
        Level::parse(&self.level)
    }
}

/// Full record for a single component
#[derive(Debug, Clone, Deserialize)]
pub struct ArchivalObject {
    /// Component title; expandable components are expected to have one
    #[serde(default)]
    pub title: Option<String>,

    /// Physical storage placements, in document order
    #[serde(default)]
    pub instances: Vec<Instance>,
}

/// A storage placement attached to an archival object
///
/// Digital-object instances carry no `sub_container`; the expander
/// treats that as a missing-field failure.
#[derive(Debug, Clone, Deserialize)]
pub struct Instance {
    /// Kind of instance as the API reports it (e.g. "mixed_materials")
    #[serde(default)]
    pub instance_type: Option<String>,

    /// Physical sub-container addressing, absent on digital instances
    #[serde(default)]
    pub sub_container: Option<SubContainer>,
}

/// Box/folder addressing within an instance
#[derive(Debug, Clone, Deserialize)]
pub struct SubContainer {
    /// Reference to the top container (the box)
    pub top_container: RecordRef,

    /// Folder/item number expression, when present
    #[serde(default)]
    pub indicator_2: Option<String>,
}

/// Top container (box) record
#[derive(Debug, Clone, Deserialize)]
pub struct TopContainer {
    /// Human-readable box indicator (number or label)
    #[serde(default)]
    pub indicator: Option<String>,
}
