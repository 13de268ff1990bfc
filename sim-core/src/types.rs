/// Identifier for a body in a [`crate::session::Session`].
///
/// This is an index into the session's body sequence, and is only
/// meaningful for the lifetime of one loaded system: a reload may reuse
/// the same index for a different body.
pub type BodyId = usize;
