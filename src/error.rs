use thiserror::Error as ThisError;

/// Failures surfaced by the clone operation and the object model. Nothing
/// is caught or retried internally; every error propagates synchronously to
/// the caller.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The source cannot be enumerated (nullish value).
    #[error("invalid source: {0}")]
    InvalidSource(String),
    /// The target rejected a property operation (non-object target,
    /// non-extensible object, incompatible non-configurable property).
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    /// A descriptor headed for installation is malformed — it mixes data
    /// and accessor fields, or carries a non-callable getter/setter.
    #[error("invalid definition for property '{key}': {reason}")]
    InvalidDefinition { key: String, reason: String },
    /// A non-function value was invoked.
    #[error("not callable: {0}")]
    NotCallable(String),
}
