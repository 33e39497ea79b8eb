//! Integration tests for the DiagramBuilder API
//!
//! These tests drive the whole pipeline through the public API only.

use lineage::{
    DiagramBuilder, DiagramError,
    config::{AppConfig, StyleConfig},
    input::{NodeMap, RawNode},
    node::RelationKind,
};

fn mixin_map() -> NodeMap {
    NodeMap::new()
        .with(
            "Class",
            RawNode::new().with_mixins(["Mixin1", "Mixin2", "Mixin3", "Mixin4", "Mixin5"]),
        )
        .with("Mixin1", RawNode::new().with_link("#Mixin"))
        .with("Mixin2", RawNode::new().with_link("#Mixin2"))
        .with("Mixin4", RawNode::new().with_link("#Mixin4"))
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_resolve_mixin_scenario() {
    let builder = DiagramBuilder::default();

    let graph = builder.resolve("Class", &mixin_map()).expect("Failed to resolve");

    let mixins: Vec<_> = graph
        .mixins(graph.focus())
        .iter()
        .map(|&idx| graph.node(idx))
        .collect();
    let names: Vec<_> = mixins.iter().map(|node| node.name()).collect();
    assert_eq!(names, ["Mixin1", "Mixin2", "Mixin3", "Mixin4", "Mixin5"]);

    let with_data: Vec<_> = mixins.iter().map(|node| node.has_data()).collect();
    assert_eq!(with_data, [true, true, false, true, false]);
    assert_eq!(mixins[0].link(), Some("#Mixin"));
    assert!(mixins.iter().all(|node| node.kind() == RelationKind::Mixin));
}

#[test]
fn test_render_mixin_scenario() {
    let builder = DiagramBuilder::default();

    let svg = builder
        .render_svg("Class", &mixin_map())
        .expect("Failed to render");

    assert!(svg.starts_with("<?xml"), "Output should start with the prolog");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(r#"class="noi""#));
    assert_eq!(svg.matches(r#"class="mixin no-ref""#).count(), 2);
    assert_eq!(svg.matches(r#"class="mixin""#).count(), 3 + 5);
    assert!(svg.contains(r##"xlink:href="#Mixin4""##));
    assert!(svg.contains("<![CDATA["));
}

#[test]
fn test_render_inheritance_chain() {
    let map = NodeMap::new()
        .with(
            "Class",
            RawNode::new()
                .with_parent("Parent")
                .with_children(["Child1", "Child2"]),
        )
        .with("Parent", RawNode::new().with_parent("Root").with_mixins(["Mixin"]))
        .with("Child1", RawNode::new().with_children(["GrandChild"]));

    let svg = DiagramBuilder::default()
        .render_svg("Class", &map)
        .expect("Failed to render");

    // Nodes without a link are drawn as no-ref whether or not they have data.
    assert_eq!(svg.matches(r#"class="parent no-ref""#).count(), 2);
    assert_eq!(svg.matches(r#"class="parent""#).count(), 2);
    assert_eq!(svg.matches(r#"class="child no-ref""#).count(), 3);
    assert_eq!(svg.matches(r#"class="child""#).count(), 3);
    assert_eq!(svg.matches(r#"class="mixin""#).count(), 1);
}

#[test]
fn test_missing_focus_is_not_found() {
    let builder = DiagramBuilder::default();

    let result = builder.render_svg("Unknown", &mixin_map());

    assert!(matches!(result, Err(DiagramError::NotFound(name)) if name == "Unknown"));
}

#[test]
fn test_empty_focus_is_invalid_argument() {
    let builder = DiagramBuilder::default();

    let result = builder.render_svg("", &mixin_map());

    assert!(matches!(result, Err(DiagramError::InvalidArgument(_))));
}

#[test]
fn test_cyclic_children_are_rejected() {
    let map = NodeMap::new()
        .with("A", RawNode::new().with_children(["B"]))
        .with("B", RawNode::new().with_children(["A"]));

    let result = DiagramBuilder::default().render_svg("A", &map);

    assert!(matches!(result, Err(DiagramError::Cycle { .. })));
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::default()
        .with_external_link("Mixin3", "https://example.com/mixin3.html")
        .with_style(StyleConfig::new(".noi rect {stroke: red;}"));
    let builder = DiagramBuilder::new(config);

    let svg = builder
        .render_svg("Class", &mixin_map())
        .expect("Failed to render");

    assert!(svg.contains(r#"xlink:href="https://example.com/mixin3.html""#));
    assert_eq!(svg.matches(r#"class="mixin no-ref""#).count(), 1);
    assert!(svg.contains(".noi rect {stroke: red;}]]>"));
}

#[test]
fn test_render_from_json_input() {
    let map = NodeMap::from_json_str(
        r##"{
            "Class": {"parent": "Base", "children": ["Leaf"], "mixes": ["Mixin"]},
            "Base": {"link": "#Base"}
        }"##,
    )
    .expect("Failed to decode map");

    let svg = DiagramBuilder::default()
        .render_svg("Class", &map)
        .expect("Failed to render");

    assert!(svg.contains(r##"xlink:href="#Base""##));
    assert!(svg.contains(r#"class="mixin no-ref""#));
}

#[test]
fn test_write_svg() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("class.svg");

    DiagramBuilder::default()
        .write_svg("Class", &mixin_map(), &path)
        .expect("Failed to write");

    let written = std::fs::read_to_string(&path).expect("Failed to read output");
    assert!(written.contains("Mixin5"));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();
    let map = mixin_map().with("Other", RawNode::new().with_parent("Class"));

    let svg1 = builder.render_svg("Class", &map).expect("Failed to render Class");
    let svg2 = builder.render_svg("Other", &map).expect("Failed to render Other");
    let svg3 = builder.render_svg("Class", &map).expect("Failed to render Class again");

    assert_ne!(svg1, svg2);
    assert_eq!(svg1, svg3, "Builds should be deterministic");
}

#[test]
fn test_render_deep_chains() {
    const DEPTH: usize = 50_000;

    let mut map = NodeMap::new().with(
        "Class",
        RawNode::new().with_parent("Parent1").with_children(["Child1"]),
    );
    for level in 1..DEPTH {
        map.insert(
            format!("Parent{level}"),
            RawNode::new().with_parent(format!("Parent{}", level + 1)),
        );
        map.insert(
            format!("Child{level}"),
            RawNode::new().with_children([format!("Child{}", level + 1)]),
        );
    }

    let svg = DiagramBuilder::default()
        .render_svg("Class", &map)
        .expect("Failed to render");

    // One 70px row per level above and below the focus row.
    assert!(svg.contains(r#"viewBox="0 0 120 7000070""#));
    assert_eq!(svg.matches(r#"class="parent""#).count(), DEPTH);
    assert_eq!(svg.matches(r#"class="child""#).count(), DEPTH);
}
