use crate::error::AutocompleteError;
use crate::models::{Category, Suggestion, SuggestionGroup};
use serde_json::Value;
use tracing::warn;

/// Turn an autocomplete response body into suggestion groups.
pub fn parse_autocomplete_body(body: &str) -> Result<Vec<SuggestionGroup>, AutocompleteError> {
    let payload: Value = serde_json::from_str(body)?;
    Ok(parse_autocomplete_payload(&payload))
}

/// Read `{"autocomplete": {"<category>": [...]}}`.
///
/// The endpoint answers `{}` when there is nothing to search for, which gives
/// no groups. Items that are neither a string nor an `[id, label]` pair are
/// skipped. Labels are shown upper-cased and double as the selection id.
pub fn parse_autocomplete_payload(payload: &Value) -> Vec<SuggestionGroup> {
    let Some(categories) = payload.get("autocomplete").and_then(Value::as_object) else {
        return Vec::new();
    };

    categories
        .iter()
        .filter_map(|(name, items)| {
            let category = Category::from(name.as_str());
            let Some(items) = items.as_array() else {
                warn!("autocomplete category {} is not a list", name);
                return None;
            };

            let suggestions: Vec<Suggestion> = items
                .iter()
                .filter_map(|item| {
                    let label = item_label(&category, item);
                    if label.is_none() {
                        warn!("skipping malformed {} suggestion: {}", name, item);
                    }
                    label
                })
                .map(|label| Suggestion::new(category.clone(), label.to_uppercase()))
                .collect();

            if suggestions.is_empty() {
                return None;
            }
            Some(SuggestionGroup {
                category,
                suggestions,
            })
        })
        .collect()
}

fn item_label(category: &Category, item: &Value) -> Option<String> {
    let text = |v: &Value| match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };

    match item {
        Value::Array(pair) if pair.len() == 2 => text(&pair[1]),
        other if category.has_plain_items() => text(other),
        // an unknown category may still send bare strings
        Value::String(_) if matches!(category, Category::Other(_)) => text(item),
        _ => None,
    }
}

/// Once the search box holds a typed selection, only that category is offered.
pub fn lock_to_query_type(
    groups: Vec<SuggestionGroup>,
    query_type: Option<&Category>,
) -> Vec<SuggestionGroup> {
    match query_type {
        Some(locked) => groups
            .into_iter()
            .filter(|g| &g.category == locked)
            .collect(),
        None => groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "autocomplete": {
                "suburbs": ["Elwood", "Elsternwick"],
                "postcodes": ["3184", 3185],
                "properties": [["/listing/12/", "12 Ormond Rd, Elwood"]],
                "agents": [["/agents/jane/", "Jane Citizen"], "broken", [1]],
                "schools": [["/s/1/", "Elwood College"]]
            }
        })
    }

    #[test]
    fn groups_keep_server_order_and_shapes() {
        let groups = parse_autocomplete_payload(&sample());
        let order: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(
            order,
            vec!["suburbs", "postcodes", "properties", "agents", "schools"]
        );

        assert_eq!(groups[0].suggestions[0], Suggestion::suburb("ELWOOD"));
        assert_eq!(groups[1].suggestions[1].label, "3185");
        assert_eq!(groups[2].suggestions[0].label, "12 ORMOND RD, ELWOOD");
        assert_eq!(groups[2].suggestions[0].id, "12 ORMOND RD, ELWOOD");
        assert_eq!(
            groups[4].category,
            Category::Other("schools".to_string())
        );
    }

    #[test]
    fn malformed_items_are_skipped() {
        let groups = parse_autocomplete_payload(&sample());
        let agents = &groups[3];
        assert_eq!(agents.suggestions.len(), 1);
        assert_eq!(agents.suggestions[0].label, "JANE CITIZEN");
    }

    #[test]
    fn empty_payload_has_no_groups() {
        assert!(parse_autocomplete_body("{}").unwrap().is_empty());
        assert!(parse_autocomplete_body(r#"{"autocomplete": {"suburbs": []}}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            parse_autocomplete_body("<html>"),
            Err(AutocompleteError::Payload(_))
        ));
    }

    #[test]
    fn lock_filters_other_categories() {
        let groups = parse_autocomplete_payload(&sample());
        let locked = lock_to_query_type(groups.clone(), Some(&Category::Suburbs));
        assert_eq!(locked.len(), 1);
        assert_eq!(locked[0].category, Category::Suburbs);

        assert_eq!(lock_to_query_type(groups.clone(), None), groups);
    }
}
