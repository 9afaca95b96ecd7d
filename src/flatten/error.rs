use thiserror::Error;

/// Errors raised while extracting a row from one record.
///
/// Any of these aborts the run: there is no per-record recovery outside the
/// specifically guarded optional fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlattenError {
    /// A key the row cannot be built without was absent
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A required key was present but held an unusable value
    #[error("field `{field}` is not {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}
