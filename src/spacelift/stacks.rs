//! Stack operations.

use serde_json::json;

use crate::error::SpaceliftError;
use crate::spacelift::query::{
    by_id_query, collection_query, into_optional_record, into_records, selection, take_field,
    DEFAULT_STACK_FIELDS,
};
use crate::spacelift::{Record, Spacelift};

impl Spacelift {
    /// Lists every stack visible to the API key.
    ///
    /// Each record contains exactly the requested `fields`, in the shape the
    /// server returned them. With `None`, `id` and `space` are requested.
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let stacks = client.get_stacks(None).await?;
    /// let named = client.get_stacks(Some(&["id", "name"])).await?;
    /// ```
    pub async fn get_stacks(&self, fields: Option<&[&str]>) -> Result<Vec<Record>, SpaceliftError> {
        let query = collection_query("Stacks", "stacks", &selection(fields, DEFAULT_STACK_FIELDS));
        let mut data = self.execute_with(&query, None).await?;
        into_records(take_field(&mut data, "stacks")?, "stacks")
    }

    /// Fetches one stack, or `None` if no stack has that id.
    ///
    /// # Errors
    ///
    /// See [`Spacelift::execute`].
    pub async fn get_stack_by_id(
        &self,
        id: &str,
        fields: Option<&[&str]>,
    ) -> Result<Option<Record>, SpaceliftError> {
        let query = by_id_query("Stack", "stack", &selection(fields, DEFAULT_STACK_FIELDS));
        let mut data = self.execute_with(&query, Some(&json!({ "id": id }))).await?;
        into_optional_record(take_field(&mut data, "stack")?, "stack")
    }
}
