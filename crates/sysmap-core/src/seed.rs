//! Hard-coded startup documents.
//!
//! `basic` is the plain business system map the editor opens with. `enhanced`
//! is the extended variant carrying the learning-loop chain, iceberg `layer`
//! tags, the DSRP framework node, perspective nodes with `affect` payloads,
//! and the meaning-vs-information pair. All extension fields are opaque
//! decoration; nothing in the core interprets them.

use serde_json::{Value, json};

use crate::envelope::ExportProfile;
use crate::model::{Document, Edge, Node, Position, Shape};

fn node(
    id: &str,
    label: &str,
    color: &str,
    shape: Shape,
    x: f64,
    y: f64,
    attr_type: &str,
    critical: bool,
) -> Node {
    let mut node = Node::new(id, label, color, shape, Position::new(x, y));
    node.data.attributes.insert("type".into(), json!(attr_type));
    node.data.attributes.insert("critical".into(), json!(critical));
    node
}

fn with_extra(mut node: Node, key: &str, value: Value) -> Node {
    node.data.extra.insert(key.to_string(), value);
    node
}

fn edge(source: &str, target: &str, edge_type: &str, data: &[(&str, Value)]) -> Edge {
    let mut edge = Edge::new(source, target, edge_type);
    for (key, value) in data {
        edge.data.insert((*key).to_string(), value.clone());
    }
    edge
}

fn core_nodes() -> Vec<Node> {
    vec![
        node("sales", "Sales", "lightgreen", Shape::Box, 100.0, 100.0, "department", true),
        node("marketing", "Marketing", "lightcoral", Shape::Box, 300.0, 100.0, "department", true),
        node("promo", "Promo", "gold", Shape::Diamond, 500.0, 100.0, "campaign", false),
        node("customers", "Customers", "lightblue", Shape::Circle, 300.0, 300.0, "external", true),
        node("products", "Products", "lightpink", Shape::Box, 100.0, 300.0, "inventory", true),
        node("revenue", "Revenue", "lightgreen", Shape::Diamond, 500.0, 300.0, "financial", true),
    ]
}

fn core_edges() -> Vec<Edge> {
    vec![
        edge("marketing", "promo", "creates", &[("frequency", json!("monthly"))]),
        edge("promo", "customers", "attracts", &[("reach", json!("10000"))]),
        edge("sales", "customers", "converts", &[("conversion_rate", json!("15%"))]),
        edge("customers", "revenue", "generates", &[("avg_value", json!(500))]),
        edge("products", "sales", "enables", &[("inventory", json!(1000))]),
        edge("marketing", "sales", "supports", &[("leads", json!("qualified"))]),
        edge("promo", "sales", "boosts", &[("lift", json!("25%"))]),
    ]
}

/// The default document the editor starts with.
pub fn basic() -> Document {
    Document::new(core_nodes(), core_edges())
}

/// Export profile matching [`basic`].
pub fn basic_profile() -> ExportProfile {
    ExportProfile::basic()
}

/// The extended startup document.
pub fn enhanced() -> Document {
    let core_layers = [
        ("sales", "patterns"),
        ("marketing", "patterns"),
        ("promo", "events"),
        ("customers", "events"),
        ("products", "structures"),
        ("revenue", "mental_models"),
    ];
    let mut nodes: Vec<Node> = core_nodes()
        .into_iter()
        .zip(core_layers)
        .map(|(n, (_, layer))| with_extra(n, "layer", json!(layer)))
        .collect();

    let loop_nodes = [
        ("test_model", "Test Model", Shape::Box, 100.0, "mental_models"),
        ("observe", "Observe", Shape::Circle, 200.0, "events"),
        ("feedback", "Feedback", Shape::Diamond, 300.0, "patterns"),
        ("reflect", "Reflect", Shape::Box, 400.0, "mental_models"),
        ("update_model", "Update Model", Shape::Diamond, 500.0, "mental_models"),
    ];
    for (id, label, shape, y, layer) in loop_nodes {
        nodes.push(with_extra(
            node(id, label, "lightcyan", shape, 700.0, y, "learning", true),
            "layer",
            json!(layer),
        ));
    }

    nodes.push(with_extra(
        with_extra(
            node("dsrp_framework", "DSRP Framework", "lightyellow", Shape::Box, 100.0, 500.0, "framework", true),
            "layer",
            json!("mental_models"),
        ),
        "dsrp",
        json!({ "D": [], "S": [], "R": [], "P": [] }),
    ));
    nodes.push(with_extra(
        with_extra(
            node("user_perspective", "User Perspective", "lightpink", Shape::Circle, 300.0, 500.0, "perspective", false),
            "layer",
            json!("mental_models"),
        ),
        "affect",
        json!({ "emotion": "frustration", "intensity": 0.6 }),
    ));
    nodes.push(with_extra(
        with_extra(
            node("developer_perspective", "Developer Perspective", "lightblue", Shape::Circle, 500.0, 500.0, "perspective", false),
            "layer",
            json!("mental_models"),
        ),
        "affect",
        json!({ "emotion": "confidence", "intensity": 0.8 }),
    ));

    let mut product_ready = with_extra(
        node("product_ready", "Product Ready", "lightgreen", Shape::Box, 100.0, 700.0, "communication", true),
        "layer",
        json!("events"),
    );
    product_ready = with_extra(product_ready, "information_payload", json!("Product is ready."));
    product_ready = with_extra(
        product_ready,
        "interpretation",
        json!("Team believes launch tomorrow."),
    );
    nodes.push(product_ready);

    let mut edges = core_edges();
    for (source, target) in [
        ("test_model", "observe"),
        ("observe", "feedback"),
        ("feedback", "reflect"),
        ("reflect", "update_model"),
        ("update_model", "test_model"),
    ] {
        edges.push(edge(source, target, "learning_loop", &[("role", json!("system"))]));
    }

    let mut dsrp_edge = edge("dsrp_framework", "sales", "dsrp", &[("role", json!("system"))]);
    dsrp_edge.id = "dsrp-sales".to_string();
    edges.push(dsrp_edge);

    edges.push(edge(
        "user_perspective",
        "product_ready",
        "sees_as",
        &[("note", json!("too complex")), ("role", json!("perspective"))],
    ));
    edges.push(edge(
        "developer_perspective",
        "product_ready",
        "sees_as",
        &[("note", json!("ready to ship")), ("role", json!("perspective"))],
    ));
    edges.push(edge("product_ready", "sales", "transfers", &[("role", json!("information"))]));
    edges.push(edge("product_ready", "marketing", "construes", &[("role", json!("meaning"))]));

    Document::new(nodes, edges)
}

/// Export profile matching [`enhanced`].
pub fn enhanced_profile() -> ExportProfile {
    ExportProfile::enhanced()
}
