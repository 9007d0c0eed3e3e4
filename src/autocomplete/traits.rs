use crate::error::AutocompleteError;
use crate::models::SuggestionGroup;
use crate::search::AutocompleteRequest;
use async_trait::async_trait;

/// Anything that can answer autocomplete requests for the search box.
/// The listings API is the real one; tests plug in canned data.
#[async_trait]
pub trait AutocompleteSource: Send + Sync {
    /// Suggestions for one request, grouped by category in server order
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<SuggestionGroup>, AutocompleteError>;

    /// Get the name of the suggestion source
    fn source_name(&self) -> &'static str;
}
