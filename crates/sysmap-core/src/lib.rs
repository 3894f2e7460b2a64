#![forbid(unsafe_code)]

//! System-map graph document engine.
//!
//! The authoritative model behind a node-and-edge "system map" editor:
//! - [`model`] — the document (nodes, edges, open attribute maps);
//! - [`ops`] — mutation operations behind [`EditorState`], including intake
//!   of rendering-surface interaction events;
//! - [`envelope`] — the persisted JSON file format (export/import with an
//!   explicit [`ImportPolicy`]);
//! - [`seed`] — the hard-coded startup documents;
//! - [`style`] — the per-shape presentation table a renderer consumes.
//!
//! Rendering and file pickers are external collaborators: they read the
//! collections, hand back events, and move complete JSON strings. Nothing
//! here touches a canvas or the filesystem.

pub mod envelope;
pub mod error;
pub mod model;
pub mod ops;
pub mod seed;
pub mod style;

pub use envelope::{
    Envelope, ExportProfile, Import, ImportPolicy, LoopAnnotation, Metadata, export, export_at,
    import, suggested_filename, suggested_filename_on,
};
pub use error::{Error, Result};
pub use model::{Document, Edge, Node, NodeData, Position, Shape};
pub use ops::{ConnectParams, EditorState, USER_CREATED, slug_id};
pub use style::{ShapeStyle, shape_style};

#[cfg(test)]
mod tests;
