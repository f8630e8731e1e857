//! Raw-vs-override field merging

use crate::error::ResolveError;

/// Keep `base` unless an override was supplied, in which case `convert` the
/// override and use it wholesale
pub(crate) fn coalesce_with<F>(base: Vec<u8>, override_value: &str, convert: F) -> Result<Vec<u8>, ResolveError>
where
    F: FnOnce(&str) -> Result<Vec<u8>, ResolveError>,
{
    if override_value.is_empty() {
        Ok(base)
    } else {
        convert(override_value)
    }
}

/// [`coalesce_with`] taking the override's bytes verbatim
pub(crate) fn coalesce(base: Vec<u8>, override_value: &str) -> Vec<u8> {
    if override_value.is_empty() {
        base
    } else {
        override_value.as_bytes().to_vec()
    }
}
