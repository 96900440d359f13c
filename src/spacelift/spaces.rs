//! Space operations.

use serde::Serialize;
use serde_json::json;

use crate::error::SpaceliftError;
use crate::spacelift::query::{
    by_id_query, collection_query, deleted_id, into_optional_record, into_records, selection,
    take_field, DEFAULT_SPACE_FIELDS,
};
use crate::spacelift::{Record, Spacelift};

const CREATE_SPACE_MUTATION: &str =
    "mutation SpaceCreate($input: SpaceInput!) { spaceCreate(input: $input) { id name } }";
const DELETE_SPACE_MUTATION: &str =
    "mutation SpaceDelete($space: ID!) { spaceDelete(space: $space) { id } }";

/// Input for [`Spacelift::create_space`].
///
/// ```rust
/// use spacelift::SpaceInput;
///
/// let input = SpaceInput::new("sandbox", "root").inherit_entities(false);
/// let json = serde_json::to_value(&input).unwrap();
/// assert_eq!(json["parentSpace"], "root");
/// assert_eq!(json["inheritEntities"], false);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceInput {
    name: String,
    parent_space: String,
    description: String,
    labels: Vec<String>,
    inherit_entities: bool,
}

impl SpaceInput {
    /// Creates an input for a space named `name` under `parent_space`.
    ///
    /// The space inherits its parent's entities unless
    /// [`inherit_entities`](Self::inherit_entities) says otherwise.
    #[must_use]
    pub fn new(name: impl Into<String>, parent_space: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_space: parent_space.into(),
            description: String::new(),
            labels: Vec::new(),
            inherit_entities: true,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Whether the space sees entities (contexts, policies) of its parent.
    #[must_use]
    pub const fn inherit_entities(mut self, inherit: bool) -> Self {
        self.inherit_entities = inherit;
        self
    }
}

impl Spacelift {
    /// Lists spaces, requesting `fields` (default `id name`).
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`].
    pub async fn get_spaces(&self, fields: Option<&[&str]>) -> Result<Vec<Record>, SpaceliftError> {
        let query = collection_query("Spaces", "spaces", &selection(fields, DEFAULT_SPACE_FIELDS));
        let mut data = self.execute_with(&query, None).await?;
        into_records(take_field(&mut data, "spaces")?, "spaces")
    }

    /// Fetches one space, or `None` if no space has that id.
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`].
    pub async fn get_space_by_id(
        &self,
        id: &str,
        fields: Option<&[&str]>,
    ) -> Result<Option<Record>, SpaceliftError> {
        let query = by_id_query("Space", "space", &selection(fields, DEFAULT_SPACE_FIELDS));
        let mut data = self.execute_with(&query, Some(&json!({ "id": id }))).await?;
        into_optional_record(take_field(&mut data, "space")?, "space")
    }

    /// Creates a space and returns its `id` and `name`.
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`]. A null result is reported as
    /// [`SpaceliftError::UnexpectedResponse`].
    pub async fn create_space(&self, input: &SpaceInput) -> Result<Record, SpaceliftError> {
        let variables = json!({ "input": input });
        let mut data = self
            .execute_with(CREATE_SPACE_MUTATION, Some(&variables))
            .await?;
        into_optional_record(take_field(&mut data, "spaceCreate")?, "spaceCreate")?.ok_or_else(
            || SpaceliftError::UnexpectedResponse {
                reason: "spaceCreate returned null".to_string(),
            },
        )
    }

    /// Deletes a space, returning the deleted id (`None` if nothing was deleted).
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`].
    pub async fn delete_space(&self, id: &str) -> Result<Option<String>, SpaceliftError> {
        let mut data = self
            .execute_with(DELETE_SPACE_MUTATION, Some(&json!({ "space": id })))
            .await?;
        deleted_id(take_field(&mut data, "spaceDelete")?, "spaceDelete")
    }
}
