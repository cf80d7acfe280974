//! Parsing of the tri-state `parent_id`/`folder_id` query parameter.

use docstore_core::error::AppError;
use docstore_core::types::ParentFilter;

/// Resolve a raw `parent_id`/`folder_id` query value.
///
/// `absent` supplies the behavior when the parameter is missing: folder and
/// document listings default to "any", the unified listing defaults to root.
/// The literal `"null"` always selects root level.
pub fn parse_parent(raw: Option<&str>, absent: ParentFilter) -> Result<ParentFilter, AppError> {
    match raw {
        None => Ok(absent),
        Some("null") | Some("") => Ok(ParentFilter::Root),
        Some(value) => value
            .parse::<i64>()
            .map(ParentFilter::Folder)
            .map_err(|_| AppError::validation(format!("Invalid folder id '{value}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_uses_endpoint_default() {
        assert_eq!(
            parse_parent(None, ParentFilter::Any).unwrap(),
            ParentFilter::Any
        );
        assert_eq!(
            parse_parent(None, ParentFilter::Root).unwrap(),
            ParentFilter::Root
        );
    }

    #[test]
    fn test_literal_null_selects_root() {
        assert_eq!(
            parse_parent(Some("null"), ParentFilter::Any).unwrap(),
            ParentFilter::Root
        );
    }

    #[test]
    fn test_numeric_value_selects_folder() {
        assert_eq!(
            parse_parent(Some("42"), ParentFilter::Root).unwrap(),
            ParentFilter::Folder(42)
        );
    }

    #[test]
    fn test_garbage_is_a_validation_error() {
        assert!(parse_parent(Some("banana"), ParentFilter::Any).is_err());
    }
}
