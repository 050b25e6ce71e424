use std::fmt;

/// Naming variants for one resource kind.
///
/// Every field feeds both sides of a patch: `path_segment` identifies the
/// route block to find, while all three fields are substituted into the
/// replacement fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// URL path segment as it appears in the route, e.g. `magic-systems`.
    pub path_segment: String,
    /// camelCase identifier used for handler locals, e.g. `magicSystem`.
    pub lower_name: String,
    /// PascalCase type name selecting the schema and storage method,
    /// e.g. `MagicSystem`.
    pub type_name: String,
}

impl ModuleDescriptor {
    pub fn new(
        path_segment: impl Into<String>,
        lower_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            path_segment: path_segment.into(),
            lower_name: lower_name.into(),
            type_name: type_name.into(),
        }
    }

    /// The nine world-bible modules, in processing order.
    ///
    /// Order only affects report layout: each descriptor's block is keyed by
    /// its own `path_segment` literal, so no two descriptors compete for the
    /// same region of the document.
    pub fn world_bible() -> Vec<ModuleDescriptor> {
        vec![
            ModuleDescriptor::new("locations", "location", "Location"),
            ModuleDescriptor::new("factions", "faction", "Faction"),
            ModuleDescriptor::new("items", "item", "Item"),
            ModuleDescriptor::new("organizations", "organization", "Organization"),
            ModuleDescriptor::new("magic-systems", "magicSystem", "MagicSystem"),
            ModuleDescriptor::new("creatures", "creature", "Creature"),
            ModuleDescriptor::new("languages", "language", "Language"),
            ModuleDescriptor::new("cultures", "culture", "Culture"),
            ModuleDescriptor::new("prophecies", "prophecy", "Prophecy"),
        ]
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment)
    }
}
