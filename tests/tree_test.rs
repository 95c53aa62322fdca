//! Tests for tree construction from raw config text

use confsplit::domain::{build_tree, CommandTree, Dialect, NodeValue, TreeBuildError};

fn children_of<'a>(tree: &'a CommandTree, key: &str) -> &'a CommandTree {
    match tree.get(key) {
        Some(NodeValue::Children(children)) => children,
        other => panic!("expected children under {key:?}, got {other:?}"),
    }
}

#[test]
fn given_nested_config_when_building_then_structure_matches_input() {
    // Arrange
    let text = "\
interface eth0
  ip address 10.0.0.1/24
  no shutdown
!
hostname router1
";

    // Act
    let tree = build_tree(text, Dialect::default()).unwrap();

    // Assert
    assert_eq!(
        tree.keys().collect::<Vec<_>>(),
        vec!["interface eth0", "hostname router1"]
    );
    let interface = children_of(&tree, "interface eth0");
    assert_eq!(
        interface.keys().collect::<Vec<_>>(),
        vec!["ip address 10.0.0.1/24", "no shutdown"]
    );
    assert!(children_of(interface, "no shutdown").is_empty());
    assert!(children_of(&tree, "hostname router1").is_empty());
}

#[test]
fn given_three_level_config_when_building_then_depth_and_order_preserved() {
    // Arrange
    let text = "\
router bgp 65001
  address-family ipv4
    network 10.0.0.0/8
  neighbor 10.1.1.1 remote-as 65002
vrf definition mgmt
";

    // Act
    let tree = build_tree(text, Dialect::default()).unwrap();

    // Assert
    assert_eq!(
        tree.keys().collect::<Vec<_>>(),
        vec!["router bgp 65001", "vrf definition mgmt"]
    );
    let bgp = children_of(&tree, "router bgp 65001");
    assert_eq!(
        bgp.keys().collect::<Vec<_>>(),
        vec!["address-family ipv4", "neighbor 10.1.1.1 remote-as 65002"]
    );
    let af = children_of(bgp, "address-family ipv4");
    assert_eq!(af.keys().collect::<Vec<_>>(), vec!["network 10.0.0.0/8"]);
}

#[test]
fn given_empty_input_when_building_then_empty_input_error() {
    for text in ["", "   ", "\n\n", " \n\t\n "] {
        let result = build_tree(text, Dialect::default());
        assert_eq!(result.unwrap_err(), TreeBuildError::EmptyInput);
    }
}

#[test]
fn given_comment_only_input_when_building_then_empty_tree() {
    let tree = build_tree("! just a banner\n!\n", Dialect::default()).unwrap();
    assert!(tree.is_empty());
}

#[test]
fn given_terminator_when_building_then_block_is_closed() {
    // "end" at depth 0 closes the interface block, so the last command is a
    // new top-level entry, not a child.
    let text = "\
interface eth0
  mtu 9000
end
hostname router1
";

    let tree = build_tree(text, Dialect::default()).unwrap();

    assert_eq!(
        tree.keys().collect::<Vec<_>>(),
        vec!["interface eth0", "hostname router1"]
    );
}

#[test]
fn given_indented_terminator_when_building_then_only_deeper_blocks_close() {
    // The indented "end" closes the address-family block but not the router
    // block, so the neighbor stays under router bgp.
    let text = "\
router bgp 65001
  address-family ipv4
    network 10.0.0.0/8
  end
  neighbor 10.1.1.1 remote-as 65002
";

    let tree = build_tree(text, Dialect::default()).unwrap();

    let bgp = children_of(&tree, "router bgp 65001");
    assert_eq!(
        bgp.keys().collect::<Vec<_>>(),
        vec!["address-family ipv4", "neighbor 10.1.1.1 remote-as 65002"]
    );
}

#[test]
fn given_terminator_without_open_block_when_building_then_no_error() {
    let tree = build_tree("end\nhostname router1\n", Dialect::default()).unwrap();
    assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["hostname router1"]);
}

#[test]
fn given_duplicate_sibling_when_building_then_duplicate_error() {
    // Arrange
    let text = "\
hostname router1
hostname router1
";

    // Act
    let err = build_tree(text, Dialect::default()).unwrap_err();

    // Assert
    match err {
        TreeBuildError::DuplicateCommand { command, line } => {
            assert_eq!(command, "hostname router1");
            assert_eq!(line, 2);
        }
        other => panic!("expected DuplicateCommand, got {other:?}"),
    }
}

#[test]
fn given_duplicate_nested_sibling_when_building_then_duplicate_error() {
    let text = "\
interface eth0
  no shutdown
  no shutdown
";
    let err = build_tree(text, Dialect::default()).unwrap_err();
    assert!(matches!(err, TreeBuildError::DuplicateCommand { .. }));
}

#[test]
fn given_same_command_under_different_parents_when_building_then_ok() {
    let text = "\
interface eth0
  no shutdown
interface eth1
  no shutdown
";
    let tree = build_tree(text, Dialect::default()).unwrap();
    assert_eq!(tree.len(), 2);
}

#[test]
fn given_mixed_indentation_when_building_then_structural_error() {
    let text = "interface eth0\n \tno shutdown\n";
    let err = build_tree(text, Dialect::default()).unwrap_err();
    assert!(matches!(
        err,
        TreeBuildError::InconsistentIndent { line: 2, .. }
    ));
}

#[test]
fn given_indent_unit_switch_when_building_then_structural_error() {
    let text = "\
interface eth0
  mtu 9000
interface eth1
\tmtu 9000
";
    let err = build_tree(text, Dialect::default()).unwrap_err();
    assert!(matches!(
        err,
        TreeBuildError::InconsistentIndent { line: 4, .. }
    ));
}

#[test]
fn given_tab_indented_config_when_building_then_structure_matches() {
    let text = "interface eth0\n\tmtu 9000\nhostname router1\n";
    let tree = build_tree(text, Dialect::default()).unwrap();
    let interface = children_of(&tree, "interface eth0");
    assert_eq!(interface.keys().collect::<Vec<_>>(), vec!["mtu 9000"]);
}

#[test]
fn given_custom_dialect_when_building_then_markers_respected() {
    // '#' comments, "exit" terminator; '!' is ordinary content now.
    let dialect = Dialect {
        comment_marker: '#',
        terminator: "exit".to_string(),
    };
    let text = "\
# banner comment
interface eth0
  mtu 9000
exit
! negate something
";

    let tree = build_tree(text, dialect).unwrap();

    assert_eq!(
        tree.keys().collect::<Vec<_>>(),
        vec!["interface eth0", "! negate something"]
    );
}

#[test]
fn given_identical_input_when_building_twice_then_trees_equal() {
    let text = "\
interface eth0
  ip address 10.0.0.1/24
hostname router1
";
    let first = build_tree(text, Dialect::default()).unwrap();
    let second = build_tree(text, Dialect::default()).unwrap();
    assert_eq!(first, second);
}
