use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// extract_min was called on a heap with no active elements
    Empty,
    /// A heap was requested with this (unusable) initial capacity
    InvalidCapacity(usize),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "cannot extract from an empty heap"),
            HeapError::InvalidCapacity(capacity) => {
                write!(f, "invalid initial capacity: {} (must be positive)", capacity)
            }
        }
    }
}

impl std::error::Error for HeapError {}
