//! Content model types shared across the Folio workspace.

pub mod content;

pub use content::{BlogPost, Category, Collection, Project, Tag};
