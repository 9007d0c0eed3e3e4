pub mod client;
pub mod response;
pub mod sequencer;
pub mod traits;

pub use client::HttpAutocompleteClient;
pub use response::{lock_to_query_type, parse_autocomplete_body, parse_autocomplete_payload};
pub use sequencer::{AutocompleteController, AutocompleteOutcome, PendingRequest, RequestToken};
pub use traits::AutocompleteSource;
