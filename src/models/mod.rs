use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction category of a listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    Sale,
    Lease,
    Commercial,
    Sold,
}

impl ListingType {
    /// Parse a raw form/URL value. Anything unrecognised falls back to `Sale`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("sale") => Self::Sale,
            Some("lease") => Self::Lease,
            Some("commercial") => Self::Commercial,
            Some("sold") => Self::Sold,
            _ => Self::Sale,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Lease => "lease",
            Self::Commercial => "commercial",
            Self::Sold => "sold",
        }
    }

    /// Status the listing search filters on
    pub fn status(&self) -> ListingStatus {
        match self {
            Self::Sold => ListingStatus::Sold,
            _ => ListingStatus::Current,
        }
    }

    /// Property class implied by the listing type, if any
    pub fn property_class(&self) -> Option<PropertyClass> {
        match self {
            Self::Commercial => Some(PropertyClass::Commercial),
            _ => None,
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Current,
    Sold,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Sold => "sold",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyClass {
    Commercial,
}

impl PropertyClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
        }
    }
}

/// Autocomplete category as named by the listings API.
///
/// The server owns the set of categories; only suburbs and postcodes get
/// special treatment here; anything else is carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Suburbs,
    Postcodes,
    Properties,
    Agents,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Suburbs => "suburbs",
            Self::Postcodes => "postcodes",
            Self::Properties => "properties",
            Self::Agents => "agents",
            Self::Other(name) => name,
        }
    }

    /// Suburbs and postcodes come back as bare strings, everything else as
    /// `[id, label]` pairs.
    pub fn has_plain_items(&self) -> bool {
        matches!(self, Self::Suburbs | Self::Postcodes)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        match name {
            "suburbs" => Self::Suburbs,
            "postcodes" => Self::Postcodes,
            "properties" => Self::Properties,
            "agents" => Self::Agents,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable entry in the search box.
///
/// `category` is `None` for text the user typed (or that came from the
/// `query` URL parameter) rather than picked from the autocomplete list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
    pub category: Option<Category>,
}

impl Suggestion {
    pub fn new(category: Category, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: label.clone(),
            label,
            category: Some(category),
        }
    }

    pub fn free_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: text.clone(),
            label: text,
            category: None,
        }
    }

    pub fn suburb(name: impl Into<String>) -> Self {
        Self::new(Category::Suburbs, name)
    }

    pub fn is_suburb(&self) -> bool {
        self.category == Some(Category::Suburbs)
    }
}

/// Suggestions of one category, in server order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionGroup {
    pub category: Category,
    pub suggestions: Vec<Suggestion>,
}

/// Formatted result of one autocomplete round trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteResults {
    pub term: String,
    pub groups: Vec<SuggestionGroup>,
    pub fetched_at: DateTime<Utc>,
}

impl AutocompleteResults {
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.suggestions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_listing_type_defaults_to_sale() {
        assert_eq!(ListingType::from_param(Some("auction")), ListingType::Sale);
        assert_eq!(ListingType::from_param(None), ListingType::Sale);
        assert_eq!(ListingType::from_param(Some("lease")), ListingType::Lease);
    }

    #[test]
    fn status_and_property_class_follow_listing_type() {
        assert_eq!(ListingType::Sold.status(), ListingStatus::Sold);
        assert_eq!(ListingType::Commercial.status(), ListingStatus::Current);
        assert_eq!(
            ListingType::Commercial.property_class(),
            Some(PropertyClass::Commercial)
        );
        assert_eq!(ListingType::Lease.property_class(), None);
    }

    #[test]
    fn categories_keep_unknown_names() {
        let category = Category::from("schools");
        assert_eq!(category, Category::Other("schools".to_string()));
        assert_eq!(category.as_str(), "schools");
        assert!(!category.has_plain_items());
        assert!(Category::from("postcodes").has_plain_items());
    }

    #[test]
    fn category_serializes_as_plain_string() {
        let json = serde_json::to_string(&Category::Agents).unwrap();
        assert_eq!(json, "\"agents\"");
        let back: Category = serde_json::from_str("\"suburbs\"").unwrap();
        assert_eq!(back, Category::Suburbs);
    }
}
