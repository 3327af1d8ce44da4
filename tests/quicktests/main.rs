#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod binary_tree;
mod heap;
mod search_tree;
