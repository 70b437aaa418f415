pub mod aggregate;
pub mod assets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(assets::router())
        .merge(aggregate::router())
        .with_state(state)
}

/// Query string as ordered key/value pairs. Repeated keys are kept.
pub(crate) type QueryPairs = Vec<(String, String)>;

/// First non-empty value of the first key in `names` that has one.
pub(crate) fn first_query_value(pairs: &[(String, String)], names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        pairs
            .iter()
            .find(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| value.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_value_wins() {
        let query = pairs(&[("tag", "defi"), ("tag", "nft")]);
        assert_eq!(first_query_value(&query, &["tag"]), Some("defi".to_string()));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let query = pairs(&[("tag", ""), ("tag", "nft")]);
        assert_eq!(first_query_value(&query, &["tag"]), Some("nft".to_string()));

        let query = pairs(&[("tag", "")]);
        assert_eq!(first_query_value(&query, &["tag"]), None);
    }

    #[test]
    fn test_later_names_are_fallbacks() {
        let query = pairs(&[("tags", "nft"), ("tag", "defi")]);
        assert_eq!(first_query_value(&query, &["tag", "tags"]), Some("defi".to_string()));

        let query = pairs(&[("tags", "nft")]);
        assert_eq!(first_query_value(&query, &["tag", "tags"]), Some("nft".to_string()));
    }
}
