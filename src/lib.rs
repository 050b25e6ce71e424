//! Route Patcher: templated rewrite of legacy update-route handlers.
//!
//! Rewrites the update routes of a TypeScript/Express route-handler file,
//! replacing each legacy `app.put("/api/<module>/:id", ...)` block with a
//! corrected handler rendered from a shared template, uniformly across the
//! nine world-bible modules.
//!
//! # Architecture
//!
//! The target file is treated as opaque text. [`BlockMatcher`] locates each
//! module's block by pattern and hands back byte spans; the patcher splices
//! the rendered fragment over those spans and writes the result back
//! atomically. Intelligence lives in span acquisition, which is isolated so a
//! real parser for the target syntax could replace the pattern matcher
//! without changing the patcher's contract.
//!
//! # Example
//!
//! ```no_run
//! use route_patcher::{run, ModuleDescriptor, UPDATE_ROUTE_TEMPLATE};
//!
//! let descriptors = ModuleDescriptor::world_bible();
//! let report = run("server/routes.ts", &descriptors, UPDATE_ROUTE_TEMPLATE)?;
//! println!("{} modules patched", report.patched());
//! # Ok::<(), route_patcher::DocumentError>(())
//! ```

pub mod descriptor;
pub mod document;
pub mod matcher;
pub mod patcher;
pub mod template;

// Re-exports
pub use descriptor::ModuleDescriptor;
pub use document::{Document, DocumentError};
pub use matcher::BlockMatcher;
pub use patcher::{
    find_and_replace, patch_document, run, DescriptorReport, PatchOutcome, PatchReport,
};
pub use template::{render, UPDATE_ROUTE_TEMPLATE};
