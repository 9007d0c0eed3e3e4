use crate::models::ListingType;

/// Where the search form submits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchAction {
    /// Form action. Empty means submit to the current page.
    pub path: &'static str,
    /// Rental searches have no property class filter
    pub exclude_property_class: bool,
}

/// Pick the results page for a listing type.
///
/// Inspection and auction pages filter in place, so an upcoming context keeps
/// the form on the current page whatever the listing type.
pub fn resolve_search_action(listing_type: ListingType, upcoming: bool) -> SearchAction {
    let path = match listing_type {
        ListingType::Sale => "/buying/",
        ListingType::Lease => "/renting/",
        ListingType::Commercial => "/buying/commercial/",
        ListingType::Sold => "/selling/sold-properties/",
    };

    SearchAction {
        path: if upcoming { "" } else { path },
        exclude_property_class: listing_type == ListingType::Lease,
    }
}

/// Upcoming inspections and auctions live under `.../upcoming...` URLs
pub fn is_upcoming_context(page_url: &str) -> bool {
    page_url.contains("upcoming")
}
