use dsdict::heap::{Heap, HeapKind};

fn sorted(mut xs: Vec<i32>) -> Vec<i32> {
    xs.sort();
    xs
}

fn check(kind: HeapKind, xs: Vec<i32>) -> bool {
    let heap = Heap::build(kind, xs.clone());
    let extreme = match kind {
        HeapKind::Min => xs.iter().min(),
        HeapKind::Max => xs.iter().max(),
    };

    heap.is_heap()
        && heap.len() == xs.len()
        && heap.peek() == extreme.copied()
        && sorted(heap.into_vec()) == sorted(xs)
}

#[quickcheck]
fn min_heap_property(xs: Vec<i32>) -> bool {
    check(HeapKind::Min, xs)
}

#[quickcheck]
fn max_heap_property(xs: Vec<i32>) -> bool {
    check(HeapKind::Max, xs)
}

#[quickcheck]
fn parents_beat_children(xs: Vec<i8>) -> bool {
    let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
    let min = Heap::min_from(xs.clone());
    let max = Heap::max_from(xs);

    let ok = |heap: &Heap, cmp: fn(&i32, &i32) -> bool| {
        let data = heap.as_slice();
        (0..data.len()).all(|i| {
            [2 * i + 1, 2 * i + 2]
                .into_iter()
                .filter(|c| *c < data.len())
                .all(|c| cmp(&data[i], &data[c]))
        })
    };

    ok(&min, i32::le) && ok(&max, i32::ge)
}

#[quickcheck]
fn rebuilding_is_stable(xs: Vec<i32>) -> bool {
    let once = Heap::min_from(xs);
    let twice = Heap::min_from(once.as_slice().to_vec());

    once == twice
}

#[test]
fn scenarios() {
    assert_eq!(Heap::min_from(vec![5, 3, 8, 1, 4]).as_slice(), [1, 3, 8, 5, 4]);
    assert_eq!(Heap::max_from(vec![5, 3, 8, 1, 4]).as_slice(), [8, 4, 5, 1, 3]);
    assert!(Heap::max_from(Vec::<i32>::new()).is_empty());
}
