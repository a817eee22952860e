//! Catalog entries and the snapshot-to-catalog mapping.

use serde::{Deserialize, Serialize};

use crate::backend::Document;

/// One e-book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Price in whole currency units.
    pub price: u32,
}

/// Field contents of a catalog document. Missing fields fall back to
/// defaults rather than dropping the document.
#[derive(Debug, Deserialize)]
struct EntryFields {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: u32,
}

impl CatalogEntry {
    /// Build an entry from a backend document: the document id plus its
    /// field contents.
    ///
    /// # Errors
    /// Returns an error when the document fields are not an object shape
    /// this catalog understands.
    pub fn from_document(doc: &Document) -> Result<Self, serde_json::Error> {
        let fields: EntryFields = serde_json::from_value(doc.fields.clone())?;
        Ok(Self {
            id: doc.id.clone(),
            title: fields.title,
            description: fields.description,
            price: fields.price,
        })
    }
}

/// Map a snapshot's documents to catalog entries, in delivered order.
/// Documents that fail to parse are skipped with a warning; snapshot order
/// is not stable across updates, so display order carries no meaning.
#[must_use]
pub fn catalog_from_documents(docs: &[Document]) -> Vec<CatalogEntry> {
    docs.iter()
        .filter_map(|doc| match CatalogEntry::from_document(doc) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping malformed catalog document {}: {e}", doc.id);
                None
            }
        })
        .collect()
}

/// Static fallback catalog, shown until the subscription delivers data and
/// whenever it fails.
#[must_use]
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: "mern_stack_guide".to_string(),
            title: "MERN STACK".to_string(),
            description: "A complete MERN guide from first route to deployment.".to_string(),
            price: 999,
        },
        CatalogEntry {
            id: "js_essentials".to_string(),
            title: "JavaScript Essentials".to_string(),
            description: "Core language concepts every web developer needs.".to_string(),
            price: 499,
        },
        CatalogEntry {
            id: "react_patterns".to_string(),
            title: "React Design Patterns".to_string(),
            description: "Component patterns for maintainable front-ends.".to_string(),
            price: 799,
        },
    ]
}

/// Price formatted for display.
#[must_use]
pub fn format_price(price: u32) -> String {
    format!("\u{20b9}{price}")
}
