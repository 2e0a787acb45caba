/// Result of applying a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Block index ranges occupied by inserted content
    pub changed: Vec<std::ops::Range<usize>>,
    pub new_selection: std::ops::Range<usize>,
    pub version: u64,
}
