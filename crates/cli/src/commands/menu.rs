//! Menu catalog.
//!
//! The menu supplies the name, price and image of each dish, the same three
//! values the site's "add to cart" buttons pass along.
//!
//! # Format
//!
//! ```yaml
//! - name: Nasi Goreng
//!   price: 25000
//!   image: assets/img/menu/nasi-goreng.jpg
//! ```

use std::path::Path;

use restaurantly_core::Price;
use serde::Deserialize;
use thiserror::Error;

const BUILTIN_MENU: &str = include_str!("../../menu.yaml");

/// Errors that can occur while loading a menu.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Failed to read menu file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse menu: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
}

/// The dishes a visitor can order, in menu order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// The menu shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled YAML does not parse.
    pub fn builtin() -> Result<Self, MenuError> {
        Self::parse(BUILTIN_MENU)
    }

    /// Load a menu from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse a menu from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid menu.
    pub fn parse(yaml: &str) -> Result<Self, MenuError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Find a dish by name, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }
}
