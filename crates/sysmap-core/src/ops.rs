//! Editor state and mutation operations.
//!
//! `EditorState` owns the authoritative document plus the transient
//! selection. Every mutation flows through here; the rendering surface only
//! reads the collections and feeds interaction events back in.
//!
//! Validation failures (empty names, self-loops, unknown ids) are silent
//! no-ops per the UI contract, reported through the return value and a
//! `tracing` event, never as errors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use tracing::{debug, warn};

use crate::model::{Document, Edge, Node, Position, Shape};

/// Relationship type assigned to connections created by the user.
pub const USER_CREATED: &str = "user_created";

/// Connection parameters as supplied by the rendering surface's connect
/// gesture. `id` and `edge_type` fall back to the same defaults as
/// [`EditorState::add_connection`] when the surface does not provide them.
#[derive(Debug, Clone, Default)]
pub struct ConnectParams {
    pub source: String,
    pub target: String,
    pub id: Option<String>,
    pub edge_type: Option<String>,
}

/// The single owner of mutable document state.
pub struct EditorState {
    document: Document,
    selection: Option<String>,
    rng: StdRng,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Like [`EditorState::new`] but with a deterministic position RNG, for
    /// reproducible tests and snapshots.
    pub fn with_position_seed(document: Document, seed: u64) -> Self {
        Self {
            document,
            selection: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Replaces the document wholesale (the Load path). Selection is cleared
    /// since it may reference a node that no longer exists.
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.selection = None;
    }

    /// Adds a node named `name`, deriving its id by slugifying the name.
    ///
    /// Returns the derived id, or `None` when `name` trims empty. Two names
    /// that slugify identically produce two nodes with the same id; callers
    /// can compare the returned id against existing nodes if they want to
    /// reject the collision.
    pub fn add_node(&mut self, name: &str, color: &str, shape: Shape) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            warn!("add_node ignored: empty name");
            return None;
        }
        let id = slug_id(name);
        let position = Position {
            x: self.rng.gen_range(100.0..500.0),
            y: self.rng.gen_range(100.0..400.0),
        };
        let mut node = Node::new(id.clone(), name, color, shape, position);
        node.data.attributes.insert("type".into(), json!(USER_CREATED));
        node.data.attributes.insert("critical".into(), json!(false));
        debug!(id = %id, "added node");
        self.document.nodes.push(node);
        Some(id)
    }

    /// Removes the node and cascades to every edge referencing it. Clears
    /// the selection when it pointed at the deleted node.
    pub fn delete_node(&mut self, id: &str) -> bool {
        let Some(idx) = self.document.nodes.iter().position(|n| n.id == id) else {
            return false;
        };
        self.document.nodes.remove(idx);
        self.document
            .edges
            .retain(|e| e.source != id && e.target != id);
        if self.selection.as_deref() == Some(id) {
            self.selection = None;
        }
        debug!(id = %id, "deleted node");
        true
    }

    /// Replaces color and shape on the matching node, leaving label,
    /// position and attributes untouched.
    pub fn update_node(&mut self, id: &str, color: &str, shape: Shape) -> bool {
        let Some(node) = self.document.node_mut(id) else {
            return false;
        };
        node.data.color = color.to_string();
        node.data.shape = shape;
        debug!(id = %id, "updated node");
        true
    }

    /// Appends a `user_created` edge `{from}-{to}`.
    ///
    /// Self-loops and empty endpoints are rejected as no-ops. An identical
    /// existing edge is not checked for: duplicates coexist and are
    /// distinguishable only by array position.
    pub fn add_connection(&mut self, from: &str, to: &str) -> bool {
        if from.is_empty() || to.is_empty() || from == to {
            warn!(from = %from, to = %to, "add_connection ignored");
            return false;
        }
        self.document.edges.push(Edge::new(from, to, USER_CREATED));
        debug!(from = %from, to = %to, "added connection");
        true
    }

    /// Connect-gesture intake from the rendering surface. Same validation as
    /// [`EditorState::add_connection`]; the surface may supply its own edge
    /// id and type.
    pub fn connect(&mut self, params: ConnectParams) -> bool {
        if params.source.is_empty() || params.target.is_empty() || params.source == params.target {
            warn!(from = %params.source, to = %params.target, "connect ignored");
            return false;
        }
        let mut edge = Edge::new(params.source, params.target, USER_CREATED);
        if let Some(id) = params.id {
            edge.id = id;
        }
        if let Some(edge_type) = params.edge_type {
            edge.edge_type = Some(edge_type);
        }
        self.document.edges.push(edge);
        true
    }

    /// Removes every edge whose `(source, target)` pair equals `(from, to)`
    /// and returns how many were removed.
    pub fn delete_connection(&mut self, from: &str, to: &str) -> usize {
        let before = self.document.edges.len();
        self.document
            .edges
            .retain(|e| !(e.source == from && e.target == to));
        let removed = before - self.document.edges.len();
        if removed > 0 {
            debug!(from = %from, to = %to, removed, "deleted connection");
        }
        removed
    }

    /// Node-click intake: selects the node if it exists.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.document.has_node(id) {
            return false;
        }
        self.selection = Some(id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Drag-move intake from the rendering surface.
    pub fn node_moved(&mut self, id: &str, position: Position) -> bool {
        let Some(node) = self.document.node_mut(id) else {
            return false;
        };
        node.position = position;
        true
    }

    /// Folds a node-removal delta from the rendering surface's built-in
    /// delete interaction back into the document. Follows the same cascade
    /// and selection rules as [`EditorState::delete_node`].
    pub fn nodes_removed(&mut self, ids: &[String]) {
        for id in ids {
            self.delete_node(id);
        }
    }

    /// Folds an edge-removal delta (by edge id) back into the document.
    pub fn edges_removed(&mut self, ids: &[String]) {
        self.document.edges.retain(|e| !ids.contains(&e.id));
    }
}

/// Lowercases `name` and collapses each whitespace run into a single hyphen.
pub fn slug_id(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        if pending_hyphen {
            out.push('-');
            pending_hyphen = false;
        }
        out.extend(ch.to_lowercase());
    }
    out
}
