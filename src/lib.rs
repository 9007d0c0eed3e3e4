//! Search box state for the listing search page: URL hydration, autocomplete
//! requests, suggestion selection and the resolved form submission.

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod models;
pub mod search;

pub use autocomplete::{
    AutocompleteController, AutocompleteOutcome, AutocompleteSource, HttpAutocompleteClient,
};
pub use config::Config;
pub use error::{AutocompleteError, ConfigError, SearchError};
pub use models::{
    Category, ListingStatus, ListingType, PropertyClass, Suggestion, SuggestionGroup,
};
pub use search::{SearchCriteria, SearchForm, Submission};
