//! Locality model for provider place search results

use serde::{Deserialize, Serialize};

/// A named place resolvable to a provider-specific id
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Locality {
    /// Provider-assigned locality id (opaque)
    pub id: String,
    /// Display name (city, town, etc.)
    pub name: String,
    /// Administrative hierarchy, outermost first (e.g. country, province)
    pub hierarchy: Vec<String>,
}

impl Locality {
    /// Create a new locality
    #[must_use]
    pub fn new(id: String, name: String, hierarchy: Vec<String>) -> Self {
        Self {
            id,
            name,
            hierarchy,
        }
    }

    /// Format the label shown in the locality selector
    #[must_use]
    pub fn selector_label(&self) -> String {
        format!(
            "{}, {} (ID: {})",
            self.name,
            self.hierarchy.join(", "),
            self.id
        )
    }
}
