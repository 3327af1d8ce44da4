use dsdict::binary_tree::Tree;

fn build(root: i8, xs: &[i8]) -> Tree {
    let mut tree = Tree::new(root.into());
    for x in xs {
        tree.insert((*x).into());
    }
    tree
}

#[quickcheck]
fn keeps_every_value(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);

    let mut expected: Vec<i32> = xs.iter().map(|x| i32::from(*x)).collect();
    expected.push(root.into());
    expected.sort();

    tree.len() == expected.len() && tree.iter().eq(expected)
}

#[quickcheck]
fn traversal_restarts(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);

    tree.iter().eq(tree.iter())
}

#[quickcheck]
fn same_input_same_shape(root: i8, xs: Vec<i8>) -> bool {
    build(root, &xs) == build(root, &xs)
}

#[quickcheck]
fn height_bounds(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);

    // A full tree of height h holds at most 2^h - 1 nodes, and a chain holds exactly h.
    let h = tree.height();
    h <= tree.len() && (h >= usize::BITS as usize || tree.len() < (1usize << h))
}
