//! Path helpers for multi-level descent.
//!
//! [`RouteRegistry::resolve`](crate::RouteRegistry::resolve) compares one
//! segment verbatim. These helpers only split a full request path into those
//! segments, so `"/meta/new"`, `"meta/new/"` and `"//meta//new"` all descend
//! through `meta` then `new`.
//!
//! ## Normalization Rules
//!
//! 1. **Empty paths** are normalized to `"/"` (root)
//! 2. **Leading slashes** are ensured (e.g., `"meta"` → `"/meta"`)
//! 3. **Trailing slashes** are removed (except for root: `"/"`)
//! 4. **Repeated slashes** are collapsed (e.g., `"/meta//new"` → `"/meta/new"`)
//!
//! Case and segment contents are never altered.

use std::borrow::Cow;

/// Normalize a path for use as a cache key.
///
/// Returns `Cow<str>` to avoid allocation when the path is already normalized.
///
/// # Examples
///
/// ```
/// use lazy_route_registry::normalize_path;
///
/// assert_eq!(normalize_path("/meta"), "/meta");
/// assert_eq!(normalize_path("meta/"), "/meta");
/// assert_eq!(normalize_path("//meta//new"), "/meta/new");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path == "/" {
        return Cow::Borrowed(path);
    }

    let already_normalized =
        path.starts_with('/') && !path.ends_with('/') && !path.contains("//");
    if already_normalized {
        return Cow::Borrowed(path);
    }

    let segments = split_path(path);
    if segments.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", segments.join("/")))
    }
}

/// Split a path into its non-empty segments.
///
/// # Examples
///
/// ```
/// use lazy_route_registry::split_path;
///
/// assert_eq!(split_path("/meta/new"), vec!["meta", "new"]);
/// assert_eq!(split_path("/"), Vec::<&str>::new());
/// assert_eq!(split_path("aluno/"), vec!["aluno"]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_already_normalized_is_borrowed() {
        assert!(matches!(normalize_path("/meta/new"), Cow::Borrowed(_)));
        assert!(matches!(normalize_path("/"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_missing_leading_slash() {
        assert_eq!(normalize_path("aluno"), "/aluno");
        assert_eq!(normalize_path("aluno/edit"), "/aluno/edit");
    }

    #[test]
    fn test_normalize_trailing_and_repeated_slashes() {
        assert_eq!(normalize_path("/authority/"), "/authority");
        assert_eq!(normalize_path("/authority//view"), "/authority/view");
    }

    #[test]
    fn test_normalize_root_variations() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_normalize_preserves_case() {
        assert_eq!(normalize_path("Meta/"), "/Meta");
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/meta/new"), vec!["meta", "new"]);
        assert_eq!(split_path("meta"), vec!["meta"]);
        assert_eq!(split_path(""), Vec::<&str>::new());
        assert_eq!(split_path("//"), Vec::<&str>::new());
    }
}
