//! Store layer: listing ownership, category catalog, derived statistics.
//!
//! The store layer is the single writer for marketplace data. The resource
//! store owns every listing; the category catalog owns the fixed display
//! metadata and derives live counts; community statistics are computed fresh
//! from the store on demand.
//!
//! # Modules
//!
//! - `resources`: in-memory listing store with CRUD operations
//! - `catalog`: fixed category metadata with derived counts
//! - `stats`: aggregate landing-page numbers
//! - `seed`: embedded demo dataset

pub mod catalog;
pub mod resources;
pub mod seed;
pub mod stats;

pub use catalog::{CategoryEntry, CategoryIndex, CategoryMeta};
pub use resources::{ListingPatch, ResourceStore};
pub use stats::CommunityStats;
