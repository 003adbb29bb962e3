//! List query parameters and their resolution against configured defaults.

use serde::Deserialize;

use crate::domain::clients::ListQuery;

/// Raw `offset`/`limit`/`search` query parameters.
///
/// Kept as strings so that a non-numeric value reaches [`ListParams::resolve`]
/// and produces an error naming the offending parameter, instead of a
/// generic deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub offset: Option<String>,

    #[serde(default)]
    pub limit: Option<String>,

    #[serde(default)]
    pub search: Option<String>,
}

/// Process-wide list defaults, taken from configuration at startup.
#[derive(Debug, Clone, Copy)]
pub struct ListDefaults {
    pub offset: i64,
    pub limit: i64,
}

/// Which list parameter failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("offset must be an integer")]
    Offset,
    #[error("limit must be an integer")]
    Limit,
}

impl ListParams {
    /// Applies defaults to absent parameters and parses the rest.
    ///
    /// # Defaults
    ///
    /// - `offset`, `limit`: from [`ListDefaults`]
    /// - `search`: empty string, always valid
    ///
    /// No bounds are enforced beyond "parses as an integer": negative or
    /// huge values are forwarded to the backend as-is.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamError`] naming the parameter that failed to parse.
    /// The request must be rejected before any RPC is made.
    pub fn resolve(&self, defaults: ListDefaults) -> Result<ListQuery, ParamError> {
        let offset = match &self.offset {
            Some(raw) => raw.parse().map_err(|_| ParamError::Offset)?,
            None => defaults.offset,
        };

        let limit = match &self.limit {
            Some(raw) => raw.parse().map_err(|_| ParamError::Limit)?,
            None => defaults.limit,
        };

        let search = self.search.clone().unwrap_or_default();

        Ok(ListQuery {
            offset,
            limit,
            search,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: ListDefaults = ListDefaults {
        offset: 0,
        limit: 10,
    };

    fn params(offset: Option<&str>, limit: Option<&str>, search: Option<&str>) -> ListParams {
        ListParams {
            offset: offset.map(str::to_owned),
            limit: limit.map(str::to_owned),
            search: search.map(str::to_owned),
        }
    }

    #[test]
    fn test_defaults_apply_when_absent() {
        let query = params(None, None, None).resolve(DEFAULTS).unwrap();
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, 10);
        assert_eq!(query.search, "");
    }

    #[test]
    fn test_explicit_values_win() {
        let query = params(Some("30"), Some("5"), Some("rust"))
            .resolve(DEFAULTS)
            .unwrap();
        assert_eq!(query.offset, 30);
        assert_eq!(query.limit, 5);
        assert_eq!(query.search, "rust");
    }

    #[test]
    fn test_bad_offset_names_offset() {
        let err = params(Some("abc"), None, None).resolve(DEFAULTS).unwrap_err();
        assert_eq!(err, ParamError::Offset);
        assert!(err.to_string().contains("offset"));
    }

    #[test]
    fn test_bad_limit_names_limit() {
        let err = params(None, Some("many"), None)
            .resolve(DEFAULTS)
            .unwrap_err();
        assert_eq!(err, ParamError::Limit);
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn test_negative_values_pass_through() {
        let query = params(Some("-3"), Some("-1"), None)
            .resolve(DEFAULTS)
            .unwrap();
        assert_eq!(query.offset, -3);
        assert_eq!(query.limit, -1);
    }

    #[test]
    fn test_huge_limit_passes_through() {
        let query = params(None, Some("9000000000"), None)
            .resolve(DEFAULTS)
            .unwrap();
        assert_eq!(query.limit, 9_000_000_000);
    }

    #[test]
    fn test_query_string_deserialization() {
        let params: ListParams =
            serde_json::from_str(r#"{"offset": "7", "search": "gateway"}"#).unwrap();
        let query = params.resolve(DEFAULTS).unwrap();
        assert_eq!(query.offset, 7);
        assert_eq!(query.limit, 10);
        assert_eq!(query.search, "gateway");
    }
}
