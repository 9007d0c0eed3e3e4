pub mod action;
pub mod criteria;
pub mod form;
pub mod params;
pub mod request;

pub use action::{is_upcoming_context, resolve_search_action, SearchAction};
pub use criteria::SearchCriteria;
pub use form::{prune_empty_fields, FormField, SearchForm, Submission};
pub use params::QueryParams;
pub use request::{build_autocomplete_request, AutocompleteRequest, MIN_QUERY_LENGTH};
