//! Request options for the Messari endpoints.
//!
//! Every option is optional. Callers pass only what they care about and the
//! client merges that over the endpoint defaults with an explicit, per-type
//! `merge`: a field set in the overrides wins, an unset (or empty) one falls
//! back to the default.

/// Default page for `/api/v2/assets`.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for `/api/v2/assets`.
pub const DEFAULT_LIMIT: u32 = 20;

/// Options for `GET /api/v2/assets`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetAllAssetsOptions {
    pub page: Option<u32>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    /// Field paths to return, e.g. `metrics/market_data/price_usd`.
    pub fields: Option<Vec<String>>,
    pub with_metrics_only: Option<bool>,
    pub with_profiles_only: Option<bool>,
}

impl GetAllAssetsOptions {
    /// Endpoint defaults: first page, 20 assets.
    pub fn defaults() -> Self {
        Self {
            page: Some(DEFAULT_PAGE),
            limit: Some(DEFAULT_LIMIT),
            ..Self::default()
        }
    }

    /// Overlay `overrides` onto `defaults`.
    pub fn merge(defaults: Self, overrides: Self) -> Self {
        Self {
            page: overrides.page.or(defaults.page),
            sort: non_empty_string(overrides.sort).or(defaults.sort),
            limit: overrides.limit.or(defaults.limit),
            fields: non_empty_fields(overrides.fields).or(defaults.fields),
            with_metrics_only: overrides.with_metrics_only.or(defaults.with_metrics_only),
            with_profiles_only: overrides.with_profiles_only.or(defaults.with_profiles_only),
        }
    }

    /// Merge over [`Self::defaults`] and pin page and limit to concrete values.
    pub fn resolve(self) -> ResolvedAssetsQuery {
        let merged = Self::merge(Self::defaults(), self);
        ResolvedAssetsQuery {
            page: merged.page.unwrap_or(DEFAULT_PAGE),
            limit: merged.limit.unwrap_or(DEFAULT_LIMIT),
            sort: merged.sort,
            fields: merged.fields,
            with_metrics_only: merged.with_metrics_only.unwrap_or(false),
            with_profiles_only: merged.with_profiles_only.unwrap_or(false),
        }
    }
}

/// Fully merged options for one `/api/v2/assets` request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAssetsQuery {
    pub page: u32,
    pub limit: u32,
    pub sort: Option<String>,
    pub fields: Option<Vec<String>>,
    pub with_metrics_only: bool,
    pub with_profiles_only: bool,
}

impl ResolvedAssetsQuery {
    /// Query string pairs in the form the upstream expects.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(fields) = &self.fields {
            // The API takes a single comma-separated list.
            pairs.push(("fields", fields.join(",")));
        }
        if self.with_metrics_only {
            pairs.push(("with-metrics", "true".to_string()));
        }
        if self.with_profiles_only {
            pairs.push(("with-profiles", "true".to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

/// Options for the per-asset endpoints (`/api/v1/assets/{key}` and `/metrics`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetFieldsOptions {
    pub fields: Option<Vec<String>>,
}

impl AssetFieldsOptions {
    pub fn merge(defaults: Self, overrides: Self) -> Self {
        Self {
            fields: non_empty_fields(overrides.fields).or(defaults.fields),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let merged = Self::merge(Self::default(), self.clone());
        merged
            .fields
            .map(|fields| vec![("fields", fields.join(","))])
            .unwrap_or_default()
    }
}

fn non_empty_string(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn non_empty_fields(value: Option<Vec<String>>) -> Option<Vec<String>> {
    value.filter(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_nothing_overridden() {
        let resolved = GetAllAssetsOptions::default().resolve();
        assert_eq!(resolved.page, 1);
        assert_eq!(resolved.limit, 20);
        assert!(resolved.fields.is_none());
        assert!(!resolved.with_metrics_only);
        assert_eq!(
            resolved.query_pairs(),
            vec![("page", "1".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn test_overrides_win() {
        let merged = GetAllAssetsOptions::merge(
            GetAllAssetsOptions::defaults(),
            GetAllAssetsOptions {
                page: Some(4),
                limit: Some(500),
                sort: Some("id".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(merged.page, Some(4));
        assert_eq!(merged.limit, Some(500));
        assert_eq!(merged.sort.as_deref(), Some("id"));
    }

    #[test]
    fn test_empty_overrides_fall_back_to_defaults() {
        let defaults = GetAllAssetsOptions {
            sort: Some("id".to_string()),
            fields: Some(vec!["id".to_string()]),
            ..GetAllAssetsOptions::defaults()
        };
        let merged = GetAllAssetsOptions::merge(
            defaults,
            GetAllAssetsOptions {
                sort: Some(String::new()),
                fields: Some(vec![]),
                ..Default::default()
            },
        );
        assert_eq!(merged.sort.as_deref(), Some("id"));
        assert_eq!(merged.fields, Some(vec!["id".to_string()]));
        assert_eq!(merged.page, Some(1));
    }

    #[test]
    fn test_query_pairs_full() {
        let resolved = GetAllAssetsOptions {
            page: Some(2),
            limit: Some(500),
            fields: Some(vec!["id".to_string(), "metrics".to_string()]),
            with_metrics_only: Some(true),
            with_profiles_only: Some(false),
            sort: None,
        }
        .resolve();

        assert_eq!(
            resolved.query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "500".to_string()),
                ("fields", "id,metrics".to_string()),
                ("with-metrics", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_asset_fields_options() {
        assert!(AssetFieldsOptions::default().query_pairs().is_empty());
        assert!(
            AssetFieldsOptions {
                fields: Some(vec![])
            }
            .query_pairs()
            .is_empty()
        );
        assert_eq!(
            AssetFieldsOptions {
                fields: Some(vec!["symbol".to_string(), "name".to_string()])
            }
            .query_pairs(),
            vec![("fields", "symbol,name".to_string())]
        );
    }
}
