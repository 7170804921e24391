use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("`{0}` is already registered")]
    Duplicate(String),
    #[error("a default is already registered as `{0}`")]
    DefaultAlreadySet(String),
    #[error("nothing registered as `{0}`")]
    Unknown(String),
    #[error("no default registered")]
    NoDefault,
    #[error("registry is empty")]
    Empty,
    #[error("expected exactly one entry, found {0}")]
    NotSingle(usize),
}
