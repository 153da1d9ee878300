use classic_ds::bst::Tree;
use quickcheck::quickcheck;

use crate::init_logging;

quickcheck! {
    fn in_order_is_non_decreasing(xs: Vec<i32>) -> bool {
        init_logging();
        let tree: Tree<_> = xs.into_iter().collect();

        tree.traverse_in_order().windows(2).all(|pair| pair[0] <= pair[1])
    }
}

quickcheck! {
    fn contains_after_insert(xs: Vec<i16>, x: i16) -> bool {
        init_logging();
        let mut tree: Tree<_> = xs.into_iter().collect();
        tree.insert(x);

        tree.contains(&x)
    }
}

quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| !tree.contains(x))
    }
}

quickcheck! {
    fn iter_matches_in_order(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.iter().eq(tree.traverse_in_order())
    }
}

#[test]
fn small_tree_traversals() {
    init_logging();
    let mut tree = Tree::new();
    tree.insert(10);
    tree.insert(5);
    tree.insert(15);

    assert_eq!(tree.traverse_in_order(), [&5, &10, &15]);
    assert_eq!(tree.traverse_pre_order(), [&10, &5, &15]);
    assert_eq!(tree.traverse_post_order(), [&5, &15, &10]);
}

#[test]
fn contains_on_empty_tree() {
    let tree = Tree::new();

    assert!(!tree.contains(&15));
}
