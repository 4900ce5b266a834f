//! Catalog validation command.
//!
//! Loads `books.json` through the same path the storefront uses at startup,
//! so a catalog that passes here will not fail the server boot.

use std::path::Path;

use readora_core::Category;
use readora_storefront::catalog::{Catalog, CatalogError};

/// Validate the catalog file and print per-category counts.
pub fn check(content_dir: &Path) -> Result<(), CatalogError> {
    let catalog = Catalog::load(content_dir)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{} books loaded", catalog.books().len());
        for category in Category::ALL {
            println!(
                "  {:<20} {}",
                category.name(),
                catalog.category_count(category)
            );
        }
    }

    Ok(())
}
