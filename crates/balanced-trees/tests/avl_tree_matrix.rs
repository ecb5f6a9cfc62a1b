use balanced_trees::AvlTree;

#[test]
fn avl_tree_empty_matrix() {
    let tree = AvlTree::<i32>::new();
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.root(), None);
    assert_eq!(tree.in_order_traverse().next(), None);
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.to_string(), "");
    assert_eq!(tree.levels(), "");
    assert_eq!(tree.print(), "∅");
    tree.assert_valid().unwrap();

    let tree: AvlTree<String> = AvlTree::default();
    assert!(tree.is_empty());
}

#[test]
fn avl_tree_smoke_matrix() {
    let mut tree = AvlTree::new();
    tree.insert(1.0);
    tree.insert(3.0);
    tree.insert(4.0);
    tree.insert(3.0);
    tree.insert(4.1);
    tree.insert(44.0);

    assert_eq!(tree.size(), 6);
    assert!(!tree.is_empty());
    let values: Vec<f64> = tree.iter().copied().collect();
    assert_eq!(values, vec![1.0, 3.0, 3.0, 4.0, 4.1, 44.0]);
    assert_eq!(tree.first(), Some(&1.0));
    assert_eq!(tree.last(), Some(&44.0));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_traversal_is_restartable_matrix() {
    let mut tree = AvlTree::new();
    for v in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        tree.insert(v);
    }

    let first: Vec<i32> = tree.in_order_traverse().copied().collect();
    let second: Vec<i32> = tree.in_order_traverse().copied().collect();
    assert_eq!(first, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
    assert_eq!(first, second);

    let it = tree.in_order_traverse();
    assert_eq!(it.len(), 9);

    let mut by_ref = Vec::new();
    for v in &tree {
        by_ref.push(*v);
    }
    assert_eq!(by_ref, first);

    let mut visited = Vec::new();
    tree.for_each(|v| visited.push(*v));
    assert_eq!(visited, first);
}

#[test]
fn avl_tree_duplicates_matrix() {
    let mut tree = AvlTree::new();
    for v in [5, 5, 5, 5, 5, 5, 5] {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 7);
    assert_eq!(tree.iter().count(), 7);
    assert!(tree.iter().all(|v| *v == 5));
    assert_eq!(tree.height(), 3);

    let mut tree = AvlTree::new();
    for v in [2, 1, 2, 3, 1, 2] {
        tree.insert(v);
    }
    let values: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(values, vec![1, 1, 2, 2, 2, 3]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_equal_values_keep_insertion_order_matrix() {
    let by_key = |a: &(i32, char), b: &(i32, char)| a.0 - b.0;
    let mut tree = AvlTree::with_comparator(by_key);
    tree.insert((1, 'a'));
    tree.insert((1, 'b'));
    tree.insert((1, 'c'));
    tree.insert((0, 'x'));
    tree.insert((1, 'd'));
    tree.insert((2, 'y'));
    tree.insert((1, 'e'));

    let values: Vec<char> = tree.iter().map(|p| p.1).collect();
    assert_eq!(values, vec!['x', 'a', 'b', 'c', 'd', 'e', 'y']);
    assert_eq!(tree.last(), Some(&(2, 'y')));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_custom_comparator_matrix() {
    let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b - a);
    for v in 0..20 {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }
    let values: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(values, (0..20).rev().collect::<Vec<_>>());
}

#[test]
fn avl_tree_strings_matrix() {
    let mut tree = AvlTree::new();
    for s in ["pear", "apple", "fig", "banana", "cherry"] {
        tree.insert(s.to_string());
    }
    let values: Vec<&str> = tree.iter().map(String::as_str).collect();
    assert_eq!(values, vec!["apple", "banana", "cherry", "fig", "pear"]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_ladder_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);
    // 1.44 * log2(n + 2) bounds an AVL tree's height.
    assert!(tree.height() <= 12);
    let values: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(values, (0..300).collect::<Vec<_>>());

    let mut tree = AvlTree::new();
    for i in (0..300).rev() {
        tree.insert(i);
    }
    tree.assert_valid().unwrap();
    assert!(tree.height() <= 12);
    assert_eq!(tree.first(), Some(&0));
    assert_eq!(tree.last(), Some(&299));
}

#[test]
fn avl_tree_node_inspection_matrix() {
    let mut tree = AvlTree::new();
    for v in [2, 1, 3] {
        tree.insert(v);
    }
    let root = tree.root().unwrap();
    let node = tree.node(root);
    assert_eq!(node.v, 2);
    assert_eq!(node.height, 2);
    assert_eq!(node.l.map(|i| *tree.value(i)), Some(1));
    assert_eq!(node.r.map(|i| *tree.value(i)), Some(3));
    assert_eq!(tree.height(), 2);
}

#[test]
fn avl_tree_display_matrix() {
    let mut tree = AvlTree::new();
    for v in [50, 45, 15] {
        tree.insert(v);
    }
    assert_eq!(
        tree.to_string(),
        "15\tHEIGHT : 1\n45\tHEIGHT : 2\n50\tHEIGHT : 1\n"
    );
    assert_eq!(
        tree.levels(),
        "ROOT   : 45\tHEIGHT : 2\nLVL 1  : 15\tHEIGHT : 1, 50\tHEIGHT : 1\n"
    );

    tree.insert(17);
    assert_eq!(
        tree.levels(),
        "ROOT   : 45\tHEIGHT : 3\n\
         LVL 1  : 15\tHEIGHT : 2, 50\tHEIGHT : 1\n\
         LVL 2  : 17\tHEIGHT : 1\n"
    );
    assert!(tree.print().starts_with("Node[1] [h=3] { 45 }\n"));
}
