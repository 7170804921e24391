use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `push` was handed an absent item.
    #[error("cannot push an absent item")]
    NullItem,
    #[error("stack is empty")]
    EmptyContainer,
    /// A peek below the bottom of a non-empty stack.
    #[error("position {pos} is out of range for a stack of {len} items")]
    OutOfRange { pos: usize, len: usize },
}
