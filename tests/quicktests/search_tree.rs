use dsdict::search_tree::Tree;

use std::collections::HashSet;

fn build(xs: &[i8]) -> Tree {
    xs.iter().map(|x| i32::from(*x)).collect()
}

fn is_sorted(tree: &Tree) -> bool {
    let values: Vec<_> = tree.iter().collect();
    values.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut expected: Vec<i32> = xs.into_iter().map(i32::from).collect();
    expected.sort();

    is_sorted(&tree) && tree.iter().eq(expected)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(i32::from(*x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(i32::from(*x)))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present: Vec<i32> = xs.into_iter().map(i32::from).collect();

    for delete in deletes.into_iter().map(i32::from) {
        let before = tree.len();
        let removed = tree.delete(delete);

        // Only one copy of a duplicated value goes at a time.
        match still_present.iter().position(|x| *x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if !removed || tree.len() != before - 1 {
                    return false;
                }
            }
            None => {
                if removed || tree.len() != before {
                    return false;
                }
            }
        }

        if !is_sorted(&tree) {
            return false;
        }
    }

    still_present.sort();
    tree.iter().eq(still_present)
}

#[quickcheck]
fn same_input_same_shape(xs: Vec<i8>) -> bool {
    build(&xs) == build(&xs)
}

#[test]
fn scenario() {
    let mut tree = Tree::new(5);
    for x in [3, 8, 1, 4] {
        tree.insert(x);
    }
    assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);

    assert!(tree.contains(4));
    assert!(!tree.contains(9));

    assert!(tree.delete(3));
    assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 4, 5, 8]);
}
