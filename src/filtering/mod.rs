// src/filtering/mod.rs

//! Provides the filename filtering logic used by the discovery stage.
//!
//! Exclusion filtering prunes well-known build/VCS/cache directories (plus
//! user additions) from traversal; extension filtering keeps only files
//! whose names end with one of the allowed suffixes. Both are exposed
//! publicly so they can be used outside the pipeline.

// Declare the sub-modules within the filtering module
mod exclusion;
mod extension;

// Re-export the items needed by other parts of the crate (like discovery)
pub use exclusion::ExclusionSet;
pub use extension::{matches_extension, normalize_extension, normalize_extensions};
