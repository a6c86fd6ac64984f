use thiserror::Error;


/// Error returned by the bounds-checked methods of
/// [`PtrVec`][crate::PtrVec] (`at`, `at_mut`, `reset_at` and friends) when
/// the given index does not refer to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for a PtrVec of length {len}")]
pub struct OutOfRange {
    /// The index that was passed in.
    pub index: usize,

    /// The length of the vector at the time of the call.
    pub len: usize,
}
