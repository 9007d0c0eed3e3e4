use crate::search::action::{is_upcoming_context, resolve_search_action, SearchAction};
use crate::search::criteria::{SearchCriteria, LISTING_TYPE_PARAM, QUERY_PARAM, SUBURB_PARAM};
use crate::search::params::QueryParams;
use tracing::debug;
use url::form_urlencoded;

pub const QUERY_TYPE_FIELD: &str = "query_type";
pub const PROPERTY_CLASS_FIELD: &str = "property_class";
pub const VIEW_AS_FIELD: &str = "view_as";
pub const PER_PAGE_FIELD: &str = "per_page";

/// Page size asked for when results are shown on the map
pub const MAP_PER_PAGE: &str = "9999";

/// Listing filters of the search page besides the search box itself
pub const FILTER_FIELDS: &[&str] = &[
    "uniqueID",
    "surrounding",
    "address_state",
    "bedrooms__gte",
    "bathrooms__gte",
    "parking__gte",
    "price__gte",
    "price__lte",
    "categories",
    "area__gte",
    "buildingDetails_area__gte",
    "boundaries",
    "agent",
    "order_by",
    VIEW_AS_FIELD,
    PER_PAGE_FIELD,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Keep only fields that carry a value, so empty inputs never reach the URL.
pub fn prune_empty_fields(fields: Vec<FormField>) -> Vec<FormField> {
    fields.into_iter().filter(|f| !f.value.is_empty()).collect()
}

/// The listing search form: the search box criteria plus the other filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub criteria: SearchCriteria,
    filters: Vec<FormField>,
}

impl SearchForm {
    pub fn new(criteria: SearchCriteria) -> Self {
        Self {
            criteria,
            filters: Vec::new(),
        }
    }

    /// Restore the whole form from the page's URL parameters
    pub fn hydrate(params: &QueryParams) -> Self {
        let mut form = Self::new(SearchCriteria::hydrate(params));
        for name in FILTER_FIELDS {
            for value in params.get_all(name).filter(|v| !v.is_empty()) {
                form.filters.push(FormField::new(*name, value));
            }
        }
        form
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn filters(&self) -> &[FormField] {
        &self.filters
    }

    /// Replace every value of `name` with a single one
    pub fn set_filter(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.filters.iter().position(|f| f.name == name) {
            Some(pos) => {
                self.filters[pos].value = value;
                let mut seen = false;
                self.filters.retain(|f| {
                    if f.name != name {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.filters.push(FormField::new(name, value)),
        }
    }

    /// Switch between list and map views. The map shows every result on one
    /// page; other views fall back to the default page size.
    pub fn set_view_as(&mut self, view: &str) {
        self.set_filter(VIEW_AS_FIELD, view);
        let per_page = if view == "map" { MAP_PER_PAGE } else { "" };
        self.set_filter(PER_PAGE_FIELD, per_page);
    }

    /// Every field the form holds for `action`, empty ones included
    pub fn fields(&self, action: &SearchAction) -> Vec<FormField> {
        let criteria = &self.criteria;
        let mut fields = Vec::new();

        let query = criteria.query_values();
        if query.is_empty() {
            fields.push(FormField::new(QUERY_PARAM, ""));
        }
        fields.extend(query.into_iter().map(|q| FormField::new(QUERY_PARAM, q)));

        fields.push(FormField::new(
            QUERY_TYPE_FIELD,
            criteria.query_type().map(|c| c.as_str()).unwrap_or_default(),
        ));
        fields.push(FormField::new(
            SUBURB_PARAM,
            criteria.suburb_field().unwrap_or_default(),
        ));
        fields.push(FormField::new(
            LISTING_TYPE_PARAM,
            criteria.listing_type().as_str(),
        ));
        if !action.exclude_property_class {
            fields.push(FormField::new(
                PROPERTY_CLASS_FIELD,
                criteria.property_class().map(|c| c.as_str()).unwrap_or_default(),
            ));
        }

        fields.extend(self.filters.iter().cloned());
        fields
    }

    /// Resolve the action and the pruned fields for submitting from `page_url`
    pub fn submit(&self, page_url: &str) -> Submission {
        let action = resolve_search_action(
            self.criteria.listing_type(),
            is_upcoming_context(page_url),
        );
        let fields = prune_empty_fields(self.fields(&action));

        debug!(
            action = action.path,
            fields = fields.len(),
            "submitting listing search"
        );
        Submission {
            action,
            page_url: page_url.to_string(),
            fields,
        }
    }
}

/// A resolved form submission (GET)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub action: SearchAction,
    page_url: String,
    pub fields: Vec<FormField>,
}

impl Submission {
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter().map(|f| (&f.name, &f.value)))
            .finish()
    }

    /// URL the browser navigates to. An in-place action reuses the current
    /// page without its old query string.
    pub fn to_url(&self) -> String {
        let base = if self.action.path.is_empty() {
            let without_fragment = self.page_url.split('#').next().unwrap_or_default();
            without_fragment.split('?').next().unwrap_or_default()
        } else {
            self.action.path
        };

        let query = self.query_string();
        if query.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ListingType, Suggestion};
    use pretty_assertions::assert_eq;

    fn names(fields: &[FormField]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn prune_keeps_only_filled_fields() {
        let pruned = prune_empty_fields(vec![
            FormField::new("a", ""),
            FormField::new("b", "x"),
            FormField::new("c", ""),
        ]);
        assert_eq!(pruned, vec![FormField::new("b", "x")]);
    }

    #[test]
    fn suburb_submission_carries_query_type_and_suburbs() {
        let mut criteria = SearchCriteria::default();
        criteria.apply_selection(Suggestion::suburb("ELWOOD")).unwrap();
        criteria.apply_selection(Suggestion::suburb("ST KILDA")).unwrap();

        let submission = SearchForm::new(criteria).submit("/");
        assert_eq!(submission.action.path, "/buying/");
        assert_eq!(
            submission.fields,
            vec![
                FormField::new("query_type", "suburbs"),
                FormField::new("address_suburb", "ELWOOD,ST KILDA,"),
                FormField::new("listing_type", "sale"),
            ]
        );
        assert_eq!(
            submission.to_url(),
            "/buying/?query_type=suburbs&address_suburb=ELWOOD%2CST+KILDA%2C&listing_type=sale"
        );
    }

    #[test]
    fn lease_drops_property_class() {
        let form = SearchForm::new(SearchCriteria::new(ListingType::Lease));
        let submission = form.submit("/");
        assert_eq!(submission.action.path, "/renting/");
        assert!(!names(&submission.fields).contains(&PROPERTY_CLASS_FIELD));
    }

    #[test]
    fn commercial_sends_property_class() {
        let mut criteria = SearchCriteria::new(ListingType::Commercial);
        criteria
            .apply_selection(Suggestion::new(Category::Properties, "1 BEACH RD"))
            .unwrap();
        let submission = SearchForm::new(criteria).submit("/");
        assert_eq!(submission.action.path, "/buying/commercial/");
        assert_eq!(
            submission.fields,
            vec![
                FormField::new("query", "1 BEACH RD"),
                FormField::new("query_type", "properties"),
                FormField::new("listing_type", "commercial"),
                FormField::new("property_class", "commercial"),
            ]
        );
    }

    #[test]
    fn upcoming_page_submits_in_place() {
        let form = SearchForm::new(SearchCriteria::new(ListingType::Sold));
        let submission = form.submit("/buying/upcoming-auctions/?listing_type=sale#top");
        assert_eq!(submission.action.path, "");
        assert_eq!(
            submission.to_url(),
            "/buying/upcoming-auctions/?listing_type=sold"
        );
    }

    #[test]
    fn map_view_hijacks_page_size() {
        let mut form = SearchForm::default();
        form.set_view_as("map");
        assert_eq!(form.filter(PER_PAGE_FIELD), Some(MAP_PER_PAGE));

        form.set_view_as("list");
        assert_eq!(form.filter(VIEW_AS_FIELD), Some("list"));
        let submission = form.submit("/");
        assert!(!names(&submission.fields).contains(&PER_PAGE_FIELD));
    }

    #[test]
    fn hydrate_keeps_filters_and_round_trips() {
        let url = "/buying/?address_suburb=ELWOOD%2C&query_type=suburbs&bedrooms__gte=2&categories=House&categories=Unit&price__lte=";
        let form = SearchForm::hydrate(&QueryParams::parse(url));
        assert_eq!(form.filter("bedrooms__gte"), Some("2"));

        let resubmitted = form.submit("/buying/");
        let again = SearchForm::hydrate(&QueryParams::parse(&resubmitted.to_url()));
        assert_eq!(again, form);
        assert_eq!(
            resubmitted.to_url(),
            "/buying/?query_type=suburbs&address_suburb=ELWOOD%2C&listing_type=sale&bedrooms__gte=2&categories=House&categories=Unit"
        );
    }

    #[test]
    fn set_filter_collapses_repeated_values() {
        let params = QueryParams::parse("?categories=House&categories=Unit");
        let mut form = SearchForm::hydrate(&params);
        form.set_filter("categories", "Land");
        assert_eq!(form.filters(), &[FormField::new("categories", "Land")]);
    }
}
