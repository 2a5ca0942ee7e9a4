//! Resolution of named resources used by the drawer configuration.
//!
//! Hosts with a theme or asset system implement [`ResourceResolver`]; simple
//! applications can use [`StaticResources`].

use std::collections::HashMap;

use crate::error::{DrawerError, Result};
use crate::widgets::ImageSource;

/// Supplies images and strings for named configuration values
pub trait ResourceResolver {
    fn image(&self, name: &str) -> Result<ImageSource>;
    fn string(&self, name: &str) -> Result<String>;
}

/// Resolver with no resources; every lookup fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceResolver for NoResources {
    fn image(&self, name: &str) -> Result<ImageSource> {
        Err(DrawerError::ResourceNotFound {
            name: name.to_string(),
        })
    }

    fn string(&self, name: &str) -> Result<String> {
        Err(DrawerError::ResourceNotFound {
            name: name.to_string(),
        })
    }
}

/// In-memory resource table
#[derive(Debug, Clone, Default)]
pub struct StaticResources {
    images: HashMap<String, ImageSource>,
    strings: HashMap<String, String>,
}

impl StaticResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(mut self, name: impl Into<String>, source: impl Into<ImageSource>) -> Self {
        self.images.insert(name.into(), source.into());
        self
    }

    pub fn string(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(name.into(), value.into());
        self
    }
}

impl ResourceResolver for StaticResources {
    fn image(&self, name: &str) -> Result<ImageSource> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| DrawerError::ResourceNotFound {
                name: name.to_string(),
            })
    }

    fn string(&self, name: &str) -> Result<String> {
        self.strings
            .get(name)
            .cloned()
            .ok_or_else(|| DrawerError::ResourceNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        let res = StaticResources::new()
            .image("arrow", "arrow.png")
            .string("label", "Menu");
        assert_eq!(ResourceResolver::image(&res, "arrow"), Ok(ImageSource::from("arrow.png")));
        assert_eq!(ResourceResolver::string(&res, "label").as_deref(), Ok("Menu"));
    }

    #[test]
    fn test_missing_resource_error() {
        let err = NoResources.string("label").unwrap_err();
        assert_eq!(
            err,
            DrawerError::ResourceNotFound {
                name: "label".into()
            }
        );
        assert_eq!(err.to_string(), "resource not found: label");
    }
}
