use crate::loc;

/// A single validation finding.
///
/// Diagnostics are immutable values: the validator accumulates them into one
/// ordered sequence (definition order, then field order, then directive
/// order, with the global collision pass appended last) and never mutates or
/// deduplicates them afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the finding was made. Findings that span multiple definitions
    /// carry [loc::FilePosition::synthetic()].
    pub location: loc::FilePosition,

    /// Name of the entity (or reserved type) the finding belongs to.
    pub entity: String,

    /// Human-readable description. May contain embedded newlines for
    /// multi-line explanations; rendering is left to the caller.
    pub message: String,
}
impl Diagnostic {
    pub(crate) fn new(
        location: loc::FilePosition,
        entity: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location,
            entity: entity.into(),
            message: message.into(),
        }
    }
}
