use thiserror::Error;

/// The error returned by a lookup when the key is absent.
///
/// Carries no payload so lookups place no `Debug` or `Display` bound on the
/// key type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key not found")]
pub struct KeyNotFound;
