use crate::*;
use serde_json::json;

#[test]
fn basic_seed_matches_the_shipped_system_map() {
    let doc = seed::basic();
    assert_eq!(doc.node_count(), 6);
    assert_eq!(doc.edge_count(), 7);

    let sales = doc.node("sales").unwrap();
    assert_eq!(sales.data.label, "Sales");
    assert_eq!(sales.data.color, "lightgreen");
    assert_eq!(sales.data.shape, Shape::Box);
    assert_eq!(sales.position, Position::new(100.0, 100.0));
    assert_eq!(sales.data.attributes["type"], json!("department"));

    let promo_sales = doc
        .edges()
        .iter()
        .find(|e| e.id == "promo-sales")
        .unwrap();
    assert_eq!(promo_sales.edge_type.as_deref(), Some("boosts"));
    assert_eq!(promo_sales.data["lift"], json!("25%"));
}

#[test]
fn enhanced_seed_extends_the_basic_system() {
    let doc = seed::enhanced();
    assert_eq!(doc.node_count(), 15);
    assert_eq!(doc.edge_count(), 17);

    // Every basic node is still present, now tagged with an iceberg layer.
    for node in seed::basic().nodes() {
        let enhanced = doc.node(&node.id).unwrap();
        assert_eq!(enhanced.data.label, node.data.label);
        assert!(enhanced.data.extra.contains_key("layer"), "{}", node.id);
    }

    // The learning loop closes back on itself.
    let loop_edges: Vec<(&str, &str)> = doc
        .edges()
        .iter()
        .filter(|e| e.edge_type.as_deref() == Some("learning_loop"))
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    assert_eq!(
        loop_edges,
        vec![
            ("test_model", "observe"),
            ("observe", "feedback"),
            ("feedback", "reflect"),
            ("reflect", "update_model"),
            ("update_model", "test_model"),
        ]
    );

    // The DSRP edge keeps its historical short id.
    let dsrp = doc.edges().iter().find(|e| e.source == "dsrp_framework").unwrap();
    assert_eq!(dsrp.id, "dsrp-sales");
}

#[test]
fn seeds_have_unique_ids_and_resolved_endpoints() {
    for doc in [seed::basic(), seed::enhanced()] {
        let text = export_at(
            &doc,
            &ExportProfile::basic(),
            "2024-05-01T12:00:00Z".parse().unwrap(),
        )
        .to_json()
        .unwrap();
        // Strict import doubles as the uniqueness/referential check.
        assert!(import(&text, ImportPolicy::Strict).is_ok());
    }
}
