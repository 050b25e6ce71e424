//! End-to-end workflow test
//!
//! Tests the complete workflow:
//! 1. Patch a routes file carrying one legacy block per module
//! 2. Verify every module's fragment is in place
//! 3. Check idempotency of a second run
//! 4. Empty-document boundary

use route_patcher::{run, ModuleDescriptor, UPDATE_ROUTE_TEMPLATE};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A pre-rewrite update handler spanning multiple lines, shaped like the
/// blocks the dev server's route file accumulated before the rewrite.
fn legacy_block(segment: &str, lower: &str) -> String {
    format!(
        r#"app.put("/api/{segment}/:id", async (req, res) => {{
    try {{
      const {{ id }} = req.params;
      const existing = await storage.get(id);
      if (!existing) {{
        return res.status(404).json({{ error: "Not found" }});
      }}
      const updated = await storage.update(id, req.body);
      res.json(updated);
    }} catch (error) {{
      console.error("Error updating {lower}:", error);
      res.status(500).json({{ error: "Internal server error" }});
    }}
  }});"#
    )
}

/// Create a routes file with one legacy block per world-bible module.
fn setup_full_routes_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("routes.ts");

    let mut content = String::from(
        "import { storage } from \"./storage\";\n\n\
         export async function registerRoutes(app: Express): Promise<Server> {\n",
    );
    for descriptor in ModuleDescriptor::world_bible() {
        content.push_str("  ");
        content.push_str(&legacy_block(
            &descriptor.path_segment,
            &descriptor.lower_name,
        ));
        content.push_str("\n\n");
    }
    content.push_str("  return createServer(app);\n}\n");

    fs::write(&file, content).unwrap();
    (dir, file)
}

#[test]
fn test_e2e_all_nine_modules_patched() {
    let (_dir, file) = setup_full_routes_file();
    let descriptors = ModuleDescriptor::world_bible();

    let report = run(&file, &descriptors, UPDATE_ROUTE_TEMPLATE).unwrap();

    assert_eq!(report.patched(), 9);
    assert_eq!(report.no_match(), 0);

    let content = fs::read_to_string(&file).unwrap();

    // Spot-check the items fragment end to end
    assert!(content.contains("app.put(\"/api/items/:id\""));
    assert!(content.contains("insertItemSchema"));
    assert!(content.contains("storage.updateItem"));

    // Every module's schema and storage call is in place
    for descriptor in &descriptors {
        assert!(content.contains(&format!("insert{}Schema", descriptor.type_name)));
        assert!(content.contains(&format!("storage.update{}", descriptor.type_name)));
    }

    // No legacy handler survived
    assert!(!content.contains("Internal server error"));

    // Surrounding file structure is untouched
    assert!(content.contains("registerRoutes"));
    assert!(content.contains("return createServer(app);"));
}

#[test]
fn test_e2e_second_run_is_stable() {
    let (_dir, file) = setup_full_routes_file();
    let descriptors = ModuleDescriptor::world_bible();

    run(&file, &descriptors, UPDATE_ROUTE_TEMPLATE).unwrap();
    let after_first = fs::read_to_string(&file).unwrap();

    let report = run(&file, &descriptors, UPDATE_ROUTE_TEMPLATE).unwrap();
    let after_second = fs::read_to_string(&file).unwrap();

    assert_eq!(report.patched(), 0);
    assert_eq!(report.already_patched(), 9);
    assert_eq!(after_first, after_second);
}

#[test]
fn test_e2e_partial_file() {
    // Only some modules present: the rest report no match and nothing is
    // inserted for them.
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("routes.ts");
    fs::write(
        &file,
        format!("  {}\n", legacy_block("magic-systems", "magicSystem")),
    )
    .unwrap();

    let descriptors = ModuleDescriptor::world_bible();
    let report = run(&file, &descriptors, UPDATE_ROUTE_TEMPLATE).unwrap();

    assert_eq!(report.patched(), 1);
    assert_eq!(report.no_match(), 8);

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("insertMagicSystemSchema"));
    assert!(!content.contains("insertItemSchema"));
}

#[test]
fn test_e2e_empty_document() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("routes.ts");
    fs::write(&file, "").unwrap();

    let descriptors = ModuleDescriptor::world_bible();
    let report = run(&file, &descriptors, UPDATE_ROUTE_TEMPLATE).unwrap();

    assert_eq!(report.no_match(), 9);
    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}
