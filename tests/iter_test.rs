//! Tests for the non-recursive tree iterators

use rstest::{fixture, rstest};

use rstree::traversal::collect_level_order_values;
use rstree::TreeNode;

//        1
//       / \
//      2   3
//     / \   \
//    4   5   6
#[fixture]
fn scenario_tree() -> TreeNode<i64> {
    TreeNode::with_children(
        1,
        Some(TreeNode::with_children(
            2,
            Some(TreeNode::new(4)),
            Some(TreeNode::new(5)),
        )),
        Some(TreeNode::with_children(3, None, Some(TreeNode::new(6)))),
    )
}

fn values<'a>(nodes: impl Iterator<Item = &'a TreeNode<i64>>) -> Vec<i64> {
    nodes.map(|node| node.value).collect()
}

// ============================================================
// Pre-Order Tests
// ============================================================

#[rstest]
fn given_scenario_tree_when_iterating_pre_order_then_parent_comes_before_children(
    scenario_tree: TreeNode<i64>,
) {
    assert_eq!(values(scenario_tree.iter()), vec![1, 2, 4, 5, 3, 6]);
}

#[rstest]
fn given_scenario_tree_when_counting_via_iterator_then_visits_every_node(
    scenario_tree: TreeNode<i64>,
) {
    assert_eq!(scenario_tree.iter().count(), 6);
    assert_eq!(scenario_tree.iter().filter(|n| n.is_leaf()).count(), 3);
}

// ============================================================
// Post-Order Tests
// ============================================================

#[rstest]
fn given_scenario_tree_when_iterating_post_order_then_children_come_before_parent(
    scenario_tree: TreeNode<i64>,
) {
    assert_eq!(values(scenario_tree.iter_postorder()), vec![4, 5, 2, 6, 3, 1]);
}

#[test]
fn given_single_node_when_iterating_post_order_then_yields_only_it() {
    let tree = TreeNode::new(9);
    assert_eq!(values(tree.iter_postorder()), vec![9]);
}

// ============================================================
// Level-Order Tests
// ============================================================

#[rstest]
fn given_scenario_tree_when_iterating_level_order_then_agrees_with_collector(
    scenario_tree: TreeNode<i64>,
) {
    let via_iter: Vec<&i64> = scenario_tree.iter_levelorder().map(|n| &n.value).collect();
    assert_eq!(via_iter, collect_level_order_values(Some(&scenario_tree)));
    assert_eq!(values(scenario_tree.iter_levelorder()), vec![1, 2, 3, 4, 5, 6]);
}

// ============================================================
// Restart Tests
// ============================================================

#[rstest]
fn given_same_tree_when_iterating_twice_then_orders_repeat(scenario_tree: TreeNode<i64>) {
    assert_eq!(values(scenario_tree.iter()), values(scenario_tree.iter()));
    assert_eq!(
        values(scenario_tree.iter_postorder()),
        values(scenario_tree.iter_postorder())
    );
    assert_eq!(
        values(scenario_tree.iter_levelorder()),
        values(scenario_tree.iter_levelorder())
    );
}
