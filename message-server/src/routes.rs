//! Ordered route table for GET paths.
//!
//! Patterns are tried in order; the first match wins:
//!
//! 1. `/{id}` – exactly one path segment, which must be an integer
//! 2. `/**`   – anything else, including `/`

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetRoute {
    ById(i64),
    All,
}

type Matcher = fn(&[&str]) -> Option<Result<GetRoute, ApiError>>;

const GET_ROUTES: &[(&str, Matcher)] = &[("/{id}", match_by_id), ("/**", match_all)];

/// Resolves a GET request path to the route that handles it.
///
/// One trailing `/` is optional, so `/42/` is the same lookup as `/42`.
pub fn resolve_get(path: &str) -> Result<GetRoute, ApiError> {
    let path = path.trim_start_matches('/');
    let path = path.strip_suffix('/').unwrap_or(path);
    let segments: Vec<&str> = path.split('/').collect();
    GET_ROUTES
        .iter()
        .find_map(|(_, matcher)| matcher(&segments))
        .unwrap_or(Ok(GetRoute::All))
}

fn match_by_id(segments: &[&str]) -> Option<Result<GetRoute, ApiError>> {
    match segments {
        [segment] if !segment.is_empty() => Some(
            segment
                .parse::<i64>()
                .map(GetRoute::ById)
                .map_err(|_| ApiError::InvalidId((*segment).to_string())),
        ),
        _ => None,
    }
}

fn match_all(_segments: &[&str]) -> Option<Result<GetRoute, ApiError>> {
    Some(Ok(GetRoute::All))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_lists_all() {
        assert_eq!(resolve_get("/").unwrap(), GetRoute::All);
    }

    #[test]
    fn test_single_integer_segment_is_by_id() {
        assert_eq!(resolve_get("/42").unwrap(), GetRoute::ById(42));
        assert_eq!(resolve_get("/999999").unwrap(), GetRoute::ById(999_999));
    }

    #[test]
    fn test_single_non_integer_segment_is_rejected() {
        let err = resolve_get("/abc").unwrap_err();
        assert!(matches!(err, ApiError::InvalidId(ref s) if s == "abc"));
    }

    #[test]
    fn test_trailing_slash_is_still_by_id() {
        assert_eq!(resolve_get("/42/").unwrap(), GetRoute::ById(42));
        assert!(resolve_get("/abc/").is_err());
        assert_eq!(resolve_get("/a/b/").unwrap(), GetRoute::All);
        assert_eq!(resolve_get("//").unwrap(), GetRoute::All);
    }

    #[test]
    fn test_nested_paths_list_all() {
        assert_eq!(resolve_get("/a/b").unwrap(), GetRoute::All);
        assert_eq!(resolve_get("/messages/42").unwrap(), GetRoute::All);
    }
}
