//! Menu catalog service.

use thiserror::Error;

use saffron_core::MenuItemId;

use crate::models::MenuItem;
use crate::store::{MenuStore, RepositoryError};

/// Errors from catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No menu item with the given id.
    #[error("menu item {0} not found")]
    NotFound(MenuItemId),

    /// Storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Read-only queries over the seeded menu catalog.
pub struct CatalogService<'a> {
    menu: &'a dyn MenuStore,
}

impl<'a> CatalogService<'a> {
    #[must_use]
    pub const fn new(menu: &'a dyn MenuStore) -> Self {
        Self { menu }
    }

    /// All items in stable insertion order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the store fails.
    pub async fn list_all(&self) -> Result<Vec<MenuItem>, CatalogError> {
        Ok(self.menu.list().await?)
    }

    /// Items whose name, description, or category contains `term`
    /// (case-insensitive). An empty term returns the full list. No
    /// ranking; insertion order is preserved among matches.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Repository` if the store fails.
    pub async fn search(&self, term: &str) -> Result<Vec<MenuItem>, CatalogError> {
        let items = self.menu.list().await?;
        if term.is_empty() {
            return Ok(items);
        }

        let needle = term.to_lowercase();
        Ok(items
            .into_iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Look up a single item.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the id is unknown.
    pub async fn get_by_id(&self, id: MenuItemId) -> Result<MenuItem, CatalogError> {
        self.menu
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }
}
