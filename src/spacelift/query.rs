//! GraphQL document construction and result extraction for the resource
//! operations.

use serde_json::Value;

use crate::error::SpaceliftError;
use crate::spacelift::Record;

/// Fields requested by [`get_stacks`](crate::Spacelift::get_stacks) and
/// [`get_stack_by_id`](crate::Spacelift::get_stack_by_id) when none are given.
pub const DEFAULT_STACK_FIELDS: &[&str] = &["id", "space"];

/// Default fields for space lookups.
pub const DEFAULT_SPACE_FIELDS: &[&str] = &["id", "name"];

/// Default fields for context lookups.
pub const DEFAULT_CONTEXT_FIELDS: &[&str] = &["id", "name"];

/// Joins the requested fields, in order, into a selection set body.
///
/// Entries are spliced verbatim, so nested selections such as
/// `"config { id value }"` pass straight through.
pub(crate) fn selection(fields: Option<&[&str]>, defaults: &[&str]) -> String {
    fields.unwrap_or(defaults).join(" ")
}

/// `query Stacks { stacks { id space } }`
pub(crate) fn collection_query(operation: &str, field: &str, selection: &str) -> String {
    format!("query {operation} {{ {field} {{ {selection} }} }}")
}

/// `query Stack($id: ID!) { stack(id: $id) { id space } }`
pub(crate) fn by_id_query(operation: &str, field: &str, selection: &str) -> String {
    format!("query {operation}($id: ID!) {{ {field}(id: $id) {{ {selection} }} }}")
}

/// Removes `field` from a `data` payload.
pub(crate) fn take_field(data: &mut Value, field: &str) -> Result<Value, SpaceliftError> {
    data.get_mut(field)
        .map(Value::take)
        .ok_or_else(|| SpaceliftError::UnexpectedResponse {
            reason: format!("response data has no '{field}' field"),
        })
}

/// Reads a list of objects. A null list is treated as empty.
pub(crate) fn into_records(value: Value, field: &str) -> Result<Vec<Record>, SpaceliftError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| into_record(item, field))
            .collect(),
        other => Err(SpaceliftError::UnexpectedResponse {
            reason: format!("expected '{field}' to be a list, got {other}"),
        }),
    }
}

/// Reads an optional object; null means the server found nothing.
pub(crate) fn into_optional_record(
    value: Value,
    field: &str,
) -> Result<Option<Record>, SpaceliftError> {
    match value {
        Value::Null => Ok(None),
        other => into_record(other, field).map(Some),
    }
}

fn into_record(value: Value, field: &str) -> Result<Record, SpaceliftError> {
    match value {
        Value::Object(record) => Ok(record),
        other => Err(SpaceliftError::UnexpectedResponse {
            reason: format!("expected '{field}' entries to be objects, got {other}"),
        }),
    }
}

/// Reads the `id` of an object returned by a delete mutation.
pub(crate) fn deleted_id(value: Value, field: &str) -> Result<Option<String>, SpaceliftError> {
    Ok(into_optional_record(value, field)?.and_then(|record| match record.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        _ => None,
    }))
}
