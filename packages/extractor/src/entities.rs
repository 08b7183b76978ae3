// Doc Entities
//
// Structured records produced by the extractor.

/// Documentation entry for a single interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    /// Interface name.
    pub name: String,
    /// Text accumulated immediately before the declaration.
    pub description: String,
    /// Properties in declaration order.
    pub properties: Vec<PropertyEntry>,
}

impl InterfaceEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            properties: Vec::new(),
        }
    }
}

/// A single property of an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    /// Property name.
    pub name: String,
    /// Raw type annotation text, captured up to the first `;`.
    pub type_annotation: String,
    /// False when the name carries a `?` marker.
    pub required: bool,
}
