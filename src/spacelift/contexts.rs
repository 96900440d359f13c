//! Context operations.
//!
//! A context is a named bundle of configuration (environment variables and
//! mounted files) that can be attached to stacks.

use serde::Serialize;
use serde_json::json;

use crate::error::SpaceliftError;
use crate::spacelift::query::{
    by_id_query, collection_query, deleted_id, into_optional_record, into_records, selection,
    take_field, DEFAULT_CONTEXT_FIELDS,
};
use crate::spacelift::{Record, Spacelift};

const CREATE_CONTEXT_MUTATION: &str = "mutation ContextCreate($input: ContextInput!) { contextCreateV2(input: $input) { id name } }";
const DELETE_CONTEXT_MUTATION: &str =
    "mutation ContextDelete($id: ID!) { contextDelete(id: $id) { id } }";

/// Input for [`Spacelift::create_context`].
///
/// # Example
///
/// ```rust
/// use spacelift::{ConfigVariable, ContextInput};
///
/// let input = ContextInput::new("aws-prod", "root")
///     .description("Production credentials")
///     .label("team:platform")
///     .variable(ConfigVariable::new("AWS_REGION", "eu-west-1"))
///     .variable(ConfigVariable::new("AWS_SECRET_ACCESS_KEY", "...").write_only());
///
/// let json = serde_json::to_value(&input).unwrap();
/// assert_eq!(json["configAttachments"][1]["writeOnly"], true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextInput {
    name: String,
    space: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    labels: Vec<String>,
    #[serde(rename = "configAttachments")]
    variables: Vec<ConfigVariable>,
}

impl ContextInput {
    /// Creates an input for a context named `name` in the space `space`.
    #[must_use]
    pub fn new(name: impl Into<String>, space: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space: space.into(),
            description: None,
            labels: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Adds an environment variable.
    #[must_use]
    pub fn variable(mut self, variable: ConfigVariable) -> Self {
        self.variables.push(variable);
        self
    }
}

/// An environment variable stored in a context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigVariable {
    id: String,
    #[serde(rename = "type")]
    kind: ConfigKind,
    value: String,
    write_only: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum ConfigKind {
    EnvironmentVariable,
}

impl ConfigVariable {
    /// Creates a readable variable `id=value`.
    #[must_use]
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ConfigKind::EnvironmentVariable,
            value: value.into(),
            write_only: false,
        }
    }

    /// Marks the variable write-only: Spacelift will not return its value.
    #[must_use]
    pub const fn write_only(mut self) -> Self {
        self.write_only = true;
        self
    }

    /// Returns the variable name.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Spacelift {
    /// Lists contexts, requesting `fields` (default `id name`).
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`].
    pub async fn get_contexts(
        &self,
        fields: Option<&[&str]>,
    ) -> Result<Vec<Record>, SpaceliftError> {
        let query = collection_query(
            "Contexts",
            "contexts",
            &selection(fields, DEFAULT_CONTEXT_FIELDS),
        );
        let mut data = self.execute_with(&query, None).await?;
        into_records(take_field(&mut data, "contexts")?, "contexts")
    }

    /// Fetches one context, or `None` if no context has that id.
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`].
    pub async fn get_context_by_id(
        &self,
        id: &str,
        fields: Option<&[&str]>,
    ) -> Result<Option<Record>, SpaceliftError> {
        let query = by_id_query(
            "Context",
            "context",
            &selection(fields, DEFAULT_CONTEXT_FIELDS),
        );
        let mut data = self.execute_with(&query, Some(&json!({ "id": id }))).await?;
        into_optional_record(take_field(&mut data, "context")?, "context")
    }

    /// Creates a context and returns its `id` and `name`.
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`]. A null result is reported as
    /// [`SpaceliftError::UnexpectedResponse`].
    pub async fn create_context(&self, input: &ContextInput) -> Result<Record, SpaceliftError> {
        let variables = json!({ "input": input });
        let mut data = self
            .execute_with(CREATE_CONTEXT_MUTATION, Some(&variables))
            .await?;
        into_optional_record(take_field(&mut data, "contextCreateV2")?, "contextCreateV2")?
            .ok_or_else(|| SpaceliftError::UnexpectedResponse {
                reason: "contextCreateV2 returned null".to_string(),
            })
    }

    /// Deletes a context, returning the deleted id (`None` if nothing was deleted).
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`].
    pub async fn delete_context(&self, id: &str) -> Result<Option<String>, SpaceliftError> {
        let mut data = self
            .execute_with(DELETE_CONTEXT_MUTATION, Some(&json!({ "id": id })))
            .await?;
        deleted_id(take_field(&mut data, "contextDelete")?, "contextDelete")
    }
}
