//! The corrected update-handler fragment and placeholder substitution.
//!
//! Placeholder markers use `__NAME__` shapes rather than brace-delimited ones
//! because the fragment itself is full of literal braces.

use crate::descriptor::ModuleDescriptor;

/// Marker replaced by [`ModuleDescriptor::path_segment`].
pub const PATH_SEGMENT_MARKER: &str = "__PATH_SEGMENT__";
/// Marker replaced by [`ModuleDescriptor::lower_name`].
pub const LOWER_NAME_MARKER: &str = "__LOWER_NAME__";
/// Marker replaced by [`ModuleDescriptor::type_name`].
pub const TYPE_NAME_MARKER: &str = "__TYPE_NAME__";

/// Replacement fragment for one update route.
///
/// The first line carries no indentation: the search pattern starts at
/// `app.put`, so the two spaces already present in the file stay in place.
/// The closing `  });` is the only line in the fragment at that indentation,
/// which keeps the rendered output matchable by its own search pattern.
pub const UPDATE_ROUTE_TEMPLATE: &str = r#"app.put("/api/__PATH_SEGMENT__/:id", async (req, res) => {
    try {
      const validatedData = insert__TYPE_NAME__Schema.partial().parse(req.body);
      const __LOWER_NAME__ = await storage.update__TYPE_NAME__(req.params.id, validatedData);
      if (!__LOWER_NAME__) {
        return res.status(404).json({ error: "__TYPE_NAME__ not found" });
      }
      res.json(__LOWER_NAME__);
    } catch (error) {
      console.error("Error updating __LOWER_NAME__:", error);
      res.status(500).json({ error: "Failed to update __LOWER_NAME__" });
    }
  });"#;

/// Substitute every marker occurrence with the descriptor's fields.
///
/// Pure string substitution: text outside the marker positions is passed
/// through byte-for-byte, and the same inputs always produce the same output.
pub fn render(template: &str, descriptor: &ModuleDescriptor) -> String {
    template
        .replace(PATH_SEGMENT_MARKER, &descriptor.path_segment)
        .replace(LOWER_NAME_MARKER, &descriptor.lower_name)
        .replace(TYPE_NAME_MARKER, &descriptor.type_name)
}
