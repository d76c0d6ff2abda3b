//! Domain models for Coursebook.
//!
//! # Core Concepts
//!
//! ## Catalog Entities
//!
//! The catalog is a forest of fixed depth. Each level owns an ordered
//! sequence of children:
//!
//! - [`Course`]: top-level unit of content, containing labs.
//! - [`Lab`]: hands-on exercise within a course, containing tasks.
//! - [`Task`]: unit of work within a lab, containing steps.
//! - [`Step`]: leaf instruction, no children.
//!
//! All entities are immutable once the catalog is loaded.
//!
//! ## Search Types
//!
//! - [`CatalogNode`]: tagged union over the four entity kinds, used when a
//!   lookup can land on any level of the tree.
//! - [`FoundItem`]: a matched node plus the ids of its ancestors, so a
//!   caller can place the match without a second lookup.
//! - [`TraversalOrder`]: which discipline an id search walks the tree in.

mod course;
mod item;
mod order;

pub use course::*;
pub use item::*;
pub use order::*;
