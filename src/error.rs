use thiserror::Error;

/// Errors reported by the drawer widget.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawerError {
    /// A second content element was added; the drawer hosts exactly one.
    #[error("Drawer can host only one direct child")]
    ContentAlreadySet,
    /// A named resource (image or string) could not be resolved.
    #[error("resource not found: {name}")]
    ResourceNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, DrawerError>;
