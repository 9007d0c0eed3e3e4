use crate::error::SearchError;
use crate::models::{Category, ListingStatus, ListingType, PropertyClass, Suggestion};
use crate::search::params::QueryParams;
use tracing::{debug, warn};

/// URL parameter carrying free text
pub const QUERY_PARAM: &str = "query";
/// URL parameter carrying the comma-separated suburb list
pub const SUBURB_PARAM: &str = "address_suburb";
pub const LISTING_TYPE_PARAM: &str = "listing_type";

/// Search intent owned by one search form.
///
/// The multi-select state (`selections`) is the only store: suburbs, free text
/// and the query type are all read from it, so they cannot drift apart.
///
/// A suburb selection discards any free text immediately. While suburbs are
/// selected the query type stays `suburbs` and other categories are refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    listing_type: ListingType,
    selections: Vec<Suggestion>,
    query_type: Option<Category>,
}

impl SearchCriteria {
    pub fn new(listing_type: ListingType) -> Self {
        Self {
            listing_type,
            ..Self::default()
        }
    }

    /// Rebuild the criteria a page was loaded with from its URL parameters.
    ///
    /// Missing or malformed parameters leave the matching part empty.
    pub fn hydrate(params: &QueryParams) -> Self {
        let mut criteria = Self::new(ListingType::from_param(params.get(LISTING_TYPE_PARAM)));

        if let Some(text) = params.get_non_empty(QUERY_PARAM) {
            criteria.seed(Suggestion::free_text(text));
        }

        if let Some(suburbs) = params.get(SUBURB_PARAM) {
            // the submitted field is comma-terminated, so empty tokens are expected
            for suburb in suburbs.split(',').filter(|s| !s.trim().is_empty()) {
                criteria.seed(Suggestion::suburb(suburb));
            }
        }

        debug!(
            listing_type = %criteria.listing_type,
            selections = criteria.selections.len(),
            "hydrated search criteria"
        );
        criteria
    }

    /// Shorthand for [`SearchCriteria::hydrate`] on a raw URL
    pub fn from_url(url: &str) -> Self {
        Self::hydrate(&QueryParams::parse(url))
    }

    fn seed(&mut self, suggestion: Suggestion) {
        if let Err(err) = self.apply_selection(suggestion) {
            warn!("ignoring URL selection: {}", err);
        }
    }

    pub fn listing_type(&self) -> ListingType {
        self.listing_type
    }

    pub fn set_listing_type(&mut self, listing_type: ListingType) {
        self.listing_type = listing_type;
    }

    pub fn status(&self) -> ListingStatus {
        self.listing_type.status()
    }

    /// Present only for commercial searches
    pub fn property_class(&self) -> Option<PropertyClass> {
        self.listing_type.property_class()
    }

    pub fn query_type(&self) -> Option<&Category> {
        self.query_type.as_ref()
    }

    /// Free text currently in the search box
    pub fn query_text(&self) -> Option<&str> {
        self.selections
            .iter()
            .find(|s| s.category.is_none())
            .map(|s| s.label.as_str())
    }

    /// Selected suburbs, in selection order
    pub fn suburbs(&self) -> impl Iterator<Item = &str> {
        self.selections
            .iter()
            .filter(|s| s.is_suburb())
            .map(|s| s.label.as_str())
    }

    pub fn has_suburbs(&self) -> bool {
        self.selections.iter().any(Suggestion::is_suburb)
    }

    /// Every active selection across all categories
    pub fn selections(&self) -> &[Suggestion] {
        &self.selections
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// The `address_suburb` form value, e.g. `"Elwood,St Kilda,"`.
    /// `None` when no suburb is selected.
    pub fn suburb_field(&self) -> Option<String> {
        if !self.has_suburbs() {
            return None;
        }
        Some(self.suburbs().fold(String::new(), |mut field, suburb| {
            field.push_str(suburb);
            field.push(',');
            field
        }))
    }

    /// Values submitted as `query`. Blank while suburbs are selected.
    pub fn query_values(&self) -> Vec<&str> {
        if self.has_suburbs() {
            return Vec::new();
        }
        self.selections.iter().map(|s| s.label.as_str()).collect()
    }

    /// Record a suggestion picked in the search box.
    pub fn apply_selection(&mut self, suggestion: Suggestion) -> Result<(), SearchError> {
        match suggestion.category.clone() {
            None => {
                self.selections.retain(|s| s.category.is_some());
                self.selections.push(suggestion);
            }
            Some(Category::Suburbs) => {
                self.selections.retain(|s| s.category.is_some());
                if !self.contains(&suggestion) {
                    self.selections.push(suggestion);
                }
                self.query_type = Some(Category::Suburbs);
            }
            Some(category) => {
                if self.has_suburbs() {
                    return Err(SearchError::CategoryLocked {
                        locked: Category::Suburbs,
                        attempted: category,
                    });
                }
                if !self.contains(&suggestion) {
                    self.selections.push(suggestion);
                }
                self.query_type = Some(category);
            }
        }
        Ok(())
    }

    /// Drop a suggestion removed from the search box. Removing something that
    /// is not selected is a no-op.
    pub fn apply_deselection(&mut self, suggestion: &Suggestion) {
        if let Some(pos) = self.selections.iter().position(|s| {
            s.category == suggestion.category && s.label == suggestion.label
        }) {
            self.selections.remove(pos);
        }

        if self.has_suburbs() {
            return;
        }
        self.query_type = self
            .selections
            .iter()
            .rev()
            .find_map(|s| s.category.clone());
    }

    fn contains(&self, suggestion: &Suggestion) -> bool {
        self.selections
            .iter()
            .any(|s| s.category == suggestion.category && s.label == suggestion.label)
    }
}
