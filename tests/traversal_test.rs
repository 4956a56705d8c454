//! Tests for depth-first and breadth-first tree walks

use lazyseq::domain::TreeBuilder;
use lazyseq::util::testing;
use lazyseq::{breadth_first, depth_first, TreeArena};
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn depth_first_labels(tree: &TreeArena<u64>) -> Vec<u64> {
    tree.iter_depth_first().map(|(_, node)| node.data).collect()
}

fn breadth_first_labels(tree: &TreeArena<u64>) -> Vec<u64> {
    tree.iter_breadth_first().map(|(_, node)| node.data).collect()
}

// ============================================================
// Reference trees
// ============================================================

//            1
//          / | \
//         2  6  7
//        / \     \
//       3   4     8
//           |
//           5
#[test]
fn given_depth_example_tree_when_depth_first_then_visits_one_to_eight() {
    let tree = TreeBuilder::parse("{1:[2,6,7], 2:[3,4], 4:[5], 7:[8]}").unwrap();
    assert_eq!(depth_first_labels(&tree), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

//            1
//          / | \
//         2  3  4
//        / \     \
//       5   6     7
//           |
//           8
#[test]
fn given_breadth_example_tree_when_breadth_first_then_visits_one_to_eight() {
    let tree = TreeBuilder::parse("{1:[2,3,4], 2:[5,6], 4:[7], 6:[8]}").unwrap();
    assert_eq!(breadth_first_labels(&tree), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

// ============================================================
// Shape cases
// ============================================================

#[rstest]
#[case::single_node("1", vec![1], vec![1])]
#[case::chain("1:[2], 2:[3], 3:[4]", vec![1, 2, 3, 4], vec![1, 2, 3, 4])]
#[case::star("1:[2,3,4,5]", vec![1, 2, 3, 4, 5], vec![1, 2, 3, 4, 5])]
#[case::binary("1:[2,3], 2:[4,5], 3:[6,7]", vec![1, 2, 4, 5, 3, 6, 7], vec![1, 2, 3, 4, 5, 6, 7])]
#[case::empty_child_list("1:[]", vec![1], vec![1])]
fn given_tree_shape_when_walking_then_expected_orders(
    #[case] notation: &str,
    #[case] depth: Vec<u64>,
    #[case] breadth: Vec<u64>,
) {
    let tree = TreeBuilder::parse(notation).unwrap();
    assert_eq!(depth_first_labels(&tree), depth);
    assert_eq!(breadth_first_labels(&tree), breadth);
}

#[test]
fn given_both_walks_when_collected_then_visit_same_node_set() {
    let tree = TreeBuilder::parse("1:[2,6,7], 2:[3,4], 4:[5], 7:[8]").unwrap();
    let mut depth = depth_first_labels(&tree);
    let mut breadth = breadth_first_labels(&tree);
    depth.sort_unstable();
    breadth.sort_unstable();
    assert_eq!(depth, breadth);
    assert_eq!(depth.len(), tree.len());
}

// ============================================================
// Walking from an arbitrary node
// ============================================================

#[test]
fn given_inner_node_when_walking_from_it_then_only_subtree_is_visited() {
    let mut tree = TreeArena::new();
    let root = tree.insert_node("root", None);
    let left = tree.insert_node("left", Some(root));
    tree.insert_node("left.a", Some(left));
    tree.insert_node("left.b", Some(left));
    tree.insert_node("right", Some(root));

    let depth: Vec<&str> = depth_first(&tree, left).map(|(_, n)| n.data).collect();
    let breadth: Vec<&str> = breadth_first(&tree, left).map(|(_, n)| n.data).collect();
    assert_eq!(depth, vec!["left", "left.a", "left.b"]);
    assert_eq!(breadth, vec!["left", "left.a", "left.b"]);
}

#[test]
fn given_walk_when_pulled_partially_then_rest_continues_lazily() {
    let tree = TreeBuilder::parse("1:[2,6,7], 2:[3,4], 4:[5], 7:[8]").unwrap();
    let mut walk = tree.iter_depth_first();
    let head: Vec<u64> = walk.by_ref().take(3).map(|(_, n)| n.data).collect();
    assert_eq!(head, vec![1, 2, 3]);
    let rest: Vec<u64> = walk.map(|(_, n)| n.data).collect();
    assert_eq!(rest, vec![4, 5, 6, 7, 8]);
}

#[test]
fn given_deep_chain_when_walking_then_no_recursion_limit() {
    let mut tree = TreeArena::new();
    let mut parent = tree.insert_node(0u64, None);
    for i in 1..10_000u64 {
        parent = tree.insert_node(i, Some(parent));
    }
    assert_eq!(tree.iter_depth_first().count(), 10_000);
    assert_eq!(tree.iter_breadth_first().last().map(|(_, n)| n.data), Some(9_999));
}
