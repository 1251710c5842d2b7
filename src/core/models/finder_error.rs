use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinderError {
    /// Either name was the empty string. Whitespace-only names are searched as given.
    #[error("Both firstname and lastname are required")]
    MissingName,
}
