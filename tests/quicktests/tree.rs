use balanced_bst::Tree;

use std::collections::HashSet;

use crate::distinct_sorted;

/// Whether the values are in non-decreasing order.
fn is_sorted<T: Ord>(xs: &[T]) -> bool {
    xs.windows(2).all(|w| w[0] <= w[1])
}

/// Sorts the values, keeping duplicates.
fn sorted<T: Ord>(mut xs: Vec<T>) -> Vec<T> {
    xs.sort_unstable();
    xs
}

quickcheck::quickcheck! {
    fn inorder_is_sorted_and_deduplicated(xs: Vec<i16>) -> bool {
        let tree = Tree::new(xs.clone());
        let expected = distinct_sorted(xs);

        tree.inorder().into_iter().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    fn build_tree_is_balanced(xs: Vec<i32>) -> bool {
        Tree::new(xs).is_balanced()
    }
}

quickcheck::quickcheck! {
    fn inorder_round_trip_is_balanced(xs: Vec<i8>, extra: Vec<i8>) -> bool {
        let mut tree = Tree::new(xs);
        for x in extra {
            if !tree.contains(&x) {
                tree.insert(x);
            }
        }
        let values: Vec<i8> = tree.inorder().into_iter().copied().collect();
        let rebuilt = Tree::new(values.clone());

        rebuilt.is_balanced() && rebuilt.inorder().into_iter().eq(values.iter())
    }
}

quickcheck::quickcheck! {
    fn insert_then_find(xs: Vec<i8>, x: i8) -> bool {
        let mut tree = Tree::new(xs);
        if tree.contains(&x) {
            return true;
        }
        tree.insert(x);

        tree.find(&x).map(|n| *n.value()) == Some(x) && is_sorted(&tree.inorder())
    }
}

quickcheck::quickcheck! {
    fn delete_then_find(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new(xs.clone());
        for x in &deletes {
            tree.delete(x);
        }

        let deleted: HashSet<_> = deletes.iter().collect();
        let remaining: Vec<_> = distinct_sorted(xs)
            .into_iter()
            .filter(|x| !deleted.contains(x))
            .collect();

        deletes.iter().all(|x| tree.find(x).is_none())
            && tree.inorder().into_iter().eq(remaining.iter())
            && tree.len() == remaining.len()
    }
}

quickcheck::quickcheck! {
    fn delete_removes_exactly_one_duplicate(xs: Vec<u8>, x: u8) -> bool {
        let mut tree = Tree::new(xs);
        tree.insert(x);
        tree.insert(x);
        let before = tree.inorder().into_iter().filter(|y| **y == x).count();

        tree.delete(&x) == Some(x)
            && tree.inorder().into_iter().filter(|y| **y == x).count() == before - 1
            && is_sorted(&tree.inorder())
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_same_values(xs: Vec<i16>, inserts: Vec<i16>) -> bool {
        let mut tree = Tree::new(xs);
        for x in inserts {
            tree.insert(x);
        }

        let inorder = tree.inorder();

        is_sorted(&inorder)
            && inorder.len() == tree.len()
            && sorted(tree.level_order()) == inorder
            && sorted(tree.preorder()) == inorder
            && sorted(tree.postorder()) == inorder
    }
}

quickcheck::quickcheck! {
    fn rebalance_restores_balance(xs: Vec<u8>, inserts: Vec<u8>) -> bool {
        let mut tree = Tree::new(xs);
        for x in inserts {
            tree.insert(x);
        }
        let expected = distinct_sorted(tree.inorder().into_iter().copied().collect());

        tree.rebalance();

        tree.is_balanced() && tree.inorder().into_iter().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    fn root_and_preorder_agree(xs: Vec<i32>) -> bool {
        let tree = Tree::new(xs);
        tree.root().map(|n| n.value()) == tree.preorder().first().copied()
            && tree.root().map(|n| n.value()) == tree.level_order().first().copied()
    }
}

#[test]
fn median_split_example() {
    let mut tree = Tree::new([5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(tree.inorder(), vec![&1, &3, &4, &5, &7, &8, &9]);
    assert!(tree.is_balanced());

    assert_eq!(tree.delete(&5), Some(5));
    assert_eq!(tree.root().map(|n| *n.value()), Some(7));
    assert_eq!(tree.inorder(), vec![&1, &3, &4, &7, &8, &9]);
}

#[test]
fn height_base_cases() {
    let empty: Tree<i32> = Tree::default();
    assert_eq!(empty.height(), -1);

    let leaf = Tree::new([1]);
    assert_eq!(leaf.height(), 0);
    assert_eq!(leaf.root().map(|n| n.height()), Some(0));
}
