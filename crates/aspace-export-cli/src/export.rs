//! Export orchestration: tree walk, row expansion, CSV output.

use crate::error::{CliError, Result};
use crate::writer;
use aspace_export_client::{ArchivalObject, AspaceClient};
use aspace_export_domain::{expand_instance, Row};
use std::path::Path;
use tracing::{debug, info};

/// Counts reported after a successful export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of file/item components expanded
    pub components: usize,

    /// Number of data rows written
    pub rows: usize,
}

/// Run the full export for one resource
///
/// Fetches the ordered descendant list once, expands every file- and
/// item-level component in document order, and writes the accumulated
/// rows to `output`. Any failure aborts the run; a partially written
/// file may remain.
pub fn run_export(
    client: &AspaceClient,
    repo: u32,
    resource: u32,
    output: &Path,
) -> Result<ExportSummary> {
    let components = client.ordered_records(repo, resource)?;
    info!(
        "fetched {} components for resource {}/{}",
        components.len(),
        repo,
        resource
    );

    let mut rows: Vec<Row> = Vec::new();
    let mut expanded = 0;
    for component in &components {
        if !component.level().is_expandable() {
            continue;
        }
        rows.extend(rows_for_component(client, &component.uri)?);
        expanded += 1;
    }

    writer::write_rows(output, &rows)?;
    info!(
        "wrote {} rows from {} components to {}",
        rows.len(),
        expanded,
        output.display()
    );

    Ok(ExportSummary {
        components: expanded,
        rows: rows.len(),
    })
}

/// Expand one component into output rows
///
/// One fetch for the archival object, plus one per instance to resolve
/// its box indicator.
fn rows_for_component(client: &AspaceClient, uri: &str) -> Result<Vec<Row>> {
    let object = client.archival_object(uri)?;
    debug!("expanding {} ({} instances)", uri, object.instances.len());

    rows_for_object(&object, uri, |container_uri| {
        let container = client.top_container(container_uri)?;
        Ok(container.indicator)
    })
}

/// Expand a fetched archival object, resolving boxes through `resolve_box`
///
/// Instances are walked in document order; an instance without a
/// `sub_container` (e.g. a digital object) is a hard failure, as is a
/// missing title. A container without an indicator is not: its rows get
/// an empty Box field and the walk continues.
fn rows_for_object(
    object: &ArchivalObject,
    uri: &str,
    mut resolve_box: impl FnMut(&str) -> Result<Option<String>>,
) -> Result<Vec<Row>> {
    let title = object
        .title
        .as_deref()
        .ok_or_else(|| CliError::MissingField(format!("title on {}", uri)))?;

    let mut rows = Vec::new();
    for instance in &object.instances {
        let sub = instance.sub_container.as_ref().ok_or_else(|| {
            CliError::MissingField(format!("sub_container on an instance of {}", uri))
        })?;

        let box_number = resolve_box(&sub.top_container.uri)?.unwrap_or_default();
        rows.extend(expand_instance(
            &box_number,
            sub.indicator_2.as_deref(),
            title,
        )?);
    }

    Ok(rows)
}
