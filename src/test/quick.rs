use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert the value into the data structure
    Insert(i32),
    /// Remove the value from the data structure
    Remove(i32),
    /// Compare iterators
    Iter,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation. Values are drawn from `i8` so that
    /// removes and duplicate inserts actually hit something.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g).into()),
            1 => Op::Remove(i8::arbitrary(g).into()),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
