//! The persisted JSON envelope: export, import, and the file-format policy.
//!
//! Wire shape (UTF-8, pretty-printed):
//!
//! ```json
//! {
//!   "nodes": [ { "id": "...", "type": "custom", "position": {...}, "data": {...} } ],
//!   "edges": [ { "id": "...", "source": "...", "target": "...", "type": "...", "data": {...} } ],
//!   "metadata": { "savedAt": "...", "version": "1.0", "description": "..." }
//! }
//! ```
//!
//! Export is deterministic given the document except for `metadata.savedAt`.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::model::{Document, Edge, Node};

/// A named feedback-loop annotation carried in the extended metadata.
/// Descriptive only; never re-validated on import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoopAnnotation {
    pub id: String,
    pub purpose: String,
}

/// Envelope metadata. All fields are lenient on deserialize so that foreign
/// or hand-edited files load as long as the node/edge arrays are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(rename = "savedAt")]
    pub saved_at: String,
    pub version: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub loops: Vec<LoopAnnotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

/// The metadata an export stamps onto the envelope, minus the timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportProfile {
    pub version: String,
    pub description: String,
    pub loops: Vec<LoopAnnotation>,
    pub features: Vec<String>,
}

impl ExportProfile {
    /// Profile of the plain system-graph export.
    pub fn basic() -> Self {
        Self {
            version: "1.0".to_string(),
            description: "System Graph Export".to_string(),
            loops: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Profile of the extended export with learning-feature annotations.
    pub fn enhanced() -> Self {
        Self {
            version: "2.0".to_string(),
            description: "Enhanced System Graph with Learning Features".to_string(),
            loops: vec![LoopAnnotation {
                id: "learning_loop".to_string(),
                purpose: "update mental models through feedback".to_string(),
            }],
            features: [
                "reflection_feedback_loop",
                "iceberg_model_layers",
                "dsrp_framework",
                "perspectives_emotional_intelligence",
                "meaning_vs_information",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }

    fn from_metadata(metadata: Metadata) -> Self {
        Self {
            version: metadata.version,
            description: metadata.description,
            loops: metadata.loops,
            features: metadata.features,
        }
    }
}

/// The complete persisted document: node/edge arrays plus metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Envelope {
    pub fn into_document(self) -> Document {
        Document {
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    /// Pretty-printed UTF-8 JSON, the one bit-exact file contract.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// How much record-level checking `import` performs beyond the structural
/// nodes/edges gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportPolicy {
    /// Trust the payload: parsed records replace the document verbatim, with
    /// no cross-reference checks. Matches the editor's historical behavior.
    #[default]
    Passthrough,
    /// Additionally reject duplicate node ids and edges whose endpoints do
    /// not resolve within the same payload.
    Strict,
}

/// A successfully imported file: the document plus the metadata profile to
/// reuse when it is exported again.
#[derive(Debug, Clone)]
pub struct Import {
    pub document: Document,
    pub profile: ExportProfile,
}

/// Serializes `document` with a fresh `savedAt` timestamp.
pub fn export(document: &Document, profile: &ExportProfile) -> Envelope {
    export_at(document, profile, Utc::now())
}

/// Serializes `document` with a caller-supplied timestamp. Exists primarily
/// to make snapshot assertions deterministic.
pub fn export_at(document: &Document, profile: &ExportProfile, saved_at: DateTime<Utc>) -> Envelope {
    Envelope {
        nodes: document.nodes.clone(),
        edges: document.edges.clone(),
        metadata: Metadata {
            saved_at: saved_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: profile.version.clone(),
            description: profile.description.clone(),
            loops: profile.loops.clone(),
            features: profile.features.clone(),
        },
    }
}

/// Parses a saved graph file.
///
/// Invalid JSON syntax is a [`Error::Parse`]; a payload without `nodes` or
/// `edges` arrays is a [`Error::SchemaMismatch`]. Neither touches any
/// existing document state, which callers keep until `import` succeeds.
pub fn import(text: &str, policy: ImportPolicy) -> Result<Import> {
    let value: Value = serde_json::from_str(text)?;

    for key in ["nodes", "edges"] {
        match value.get(key) {
            Some(Value::Array(_)) => {}
            _ => {
                warn!(missing = key, "rejecting graph file");
                return Err(Error::SchemaMismatch { missing: key });
            }
        }
    }

    let envelope: Envelope = serde_json::from_value(value)?;
    if policy == ImportPolicy::Strict {
        check_document(&envelope)?;
    }

    let profile = ExportProfile::from_metadata(envelope.metadata.clone());
    Ok(Import {
        document: envelope.into_document(),
        profile,
    })
}

fn check_document(envelope: &Envelope) -> Result<()> {
    let mut ids: IndexSet<&str> = IndexSet::with_capacity(envelope.nodes.len());
    for node in &envelope.nodes {
        if !ids.insert(node.id.as_str()) {
            return Err(Error::InvalidDocument {
                message: format!("duplicate node id `{}`", node.id),
            });
        }
    }
    for edge in &envelope.edges {
        for endpoint in [&edge.source, &edge.target] {
            if !ids.contains(endpoint.as_str()) {
                return Err(Error::InvalidDocument {
                    message: format!(
                        "edge `{}` references missing node `{endpoint}`",
                        edge.id
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Download filename offered for an export: `{prefix}-{YYYY-MM-DD}.json`.
pub fn suggested_filename(prefix: &str) -> String {
    suggested_filename_on(prefix, Utc::now().date_naive())
}

pub fn suggested_filename_on(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.json", date.format("%Y-%m-%d"))
}
