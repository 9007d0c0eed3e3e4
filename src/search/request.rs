use crate::models::{ListingStatus, ListingType, PropertyClass};
use crate::search::criteria::SearchCriteria;
use serde::Serialize;

/// Shortest term worth sending to the autocomplete endpoint
pub const MIN_QUERY_LENGTH: usize = 3;

/// Query parameters of `GET /properties/autocomplete/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutocompleteRequest {
    pub query: String,
    pub listing_type: ListingType,
    pub status: ListingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_class: Option<PropertyClass>,
}

impl AutocompleteRequest {
    /// Name/value pairs in the order they go on the wire
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("query", self.query.clone()),
            ("listing_type", self.listing_type.as_str().to_string()),
            ("status", self.status.as_str().to_string()),
        ];
        if let Some(class) = self.property_class {
            pairs.push(("property_class", class.as_str().to_string()));
        }
        pairs
    }
}

/// Map the form's listing type onto what the autocomplete endpoint filters by.
///
/// Commercial and sold searches are both sale listings to the API; they differ
/// by property class and status.
pub fn build_autocomplete_request(criteria: &SearchCriteria, term: &str) -> AutocompleteRequest {
    let (listing_type, status, property_class) = match criteria.listing_type() {
        ListingType::Sale => (ListingType::Sale, ListingStatus::Current, None),
        ListingType::Lease => (ListingType::Lease, ListingStatus::Current, None),
        ListingType::Commercial => (
            ListingType::Sale,
            ListingStatus::Current,
            Some(PropertyClass::Commercial),
        ),
        ListingType::Sold => (ListingType::Sale, ListingStatus::Sold, None),
    };

    AutocompleteRequest {
        query: term.to_string(),
        listing_type,
        status,
        property_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request_for(listing_type: Option<&str>) -> AutocompleteRequest {
        let criteria = SearchCriteria::new(ListingType::from_param(listing_type));
        build_autocomplete_request(&criteria, "elw")
    }

    #[test]
    fn listing_type_table() {
        let cases = [
            (Some("sale"), ListingType::Sale, ListingStatus::Current, None),
            (Some("lease"), ListingType::Lease, ListingStatus::Current, None),
            (
                Some("commercial"),
                ListingType::Sale,
                ListingStatus::Current,
                Some(PropertyClass::Commercial),
            ),
            (Some("sold"), ListingType::Sale, ListingStatus::Sold, None),
            (Some("rural"), ListingType::Sale, ListingStatus::Current, None),
            (None, ListingType::Sale, ListingStatus::Current, None),
        ];

        for (input, listing_type, status, property_class) in cases {
            assert_eq!(
                request_for(input),
                AutocompleteRequest {
                    query: "elw".to_string(),
                    listing_type,
                    status,
                    property_class,
                },
                "listing type {:?}",
                input
            );
        }
    }

    #[test]
    fn property_class_omitted_unless_commercial() {
        let sale = serde_json::to_value(request_for(Some("sale"))).unwrap();
        assert!(sale.get("property_class").is_none());

        let commercial = request_for(Some("commercial"));
        assert_eq!(
            commercial.to_pairs(),
            vec![
                ("query", "elw".to_string()),
                ("listing_type", "sale".to_string()),
                ("status", "current".to_string()),
                ("property_class", "commercial".to_string()),
            ]
        );
    }
}
