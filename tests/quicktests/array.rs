use array_bst::{ArrayBst, Layout, OneBased, ZeroBased};
use quickcheck::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Plenty of room for random `i8`s without making every test allocate megabytes.
const CAPACITY: usize = 1 << 12;

/// Applies a set of operations to a tree and a set. Inserts the tree refuses for lack of
/// room are left out of the set so both should always hold the same values.
fn do_ops<L: Layout>(ops: &[Op<i8>], tree: &mut ArrayBst<i8, L>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(x) => {
                let inserted = tree.insert(*x).unwrap();
                if set.contains(x) {
                    assert!(!inserted, "duplicate {} was accepted", x);
                } else if inserted {
                    set.insert(*x);
                }
            }
            Op::Remove(x) => {
                assert_eq!(tree.delete(x), Ok(set.remove(x)));
            }
            Op::Contains(x) => {
                assert_eq!(tree.contains(x), set.contains(x));
            }
            Op::Iter => {
                assert!(tree.iter().eq(set.iter()));
            }
        }
        assert_eq!(tree.len(), set.len());
    }
}

/// Checks the order and connectivity invariants through the public slot view: every value is
/// within the bounds its ancestors set, and every occupied slot is reachable from the root.
fn is_valid<L: Layout>(tree: &ArrayBst<i8, L>) -> bool {
    let slots = tree.slots();
    let get = |index: usize| slots.get(index).copied().flatten();

    let mut reached = 0;
    let mut pending = vec![(L::root(), i16::MIN, i16::MAX)];
    while let Some((index, low, high)) = pending.pop() {
        let Some(value) = get(index) else {
            continue;
        };
        let value = i16::from(value);
        if value <= low || value >= high {
            return false;
        }
        reached += 1;
        pending.push((L::left(index), low, value));
        pending.push((L::right(index), value, high));
    }

    let occupied = slots.iter().filter(|slot| slot.is_some()).count();
    occupied == reached && occupied == tree.len()
}

fn fuzz<L: Layout>(ops: Vec<Op<i8>>) -> bool {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = ArrayBst::<i8, L>::with_capacity(CAPACITY);
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);

    is_valid(&tree)
        && tree.len() == set.len()
        && tree.iter().eq(set.iter())
        && set.iter().all(|x| tree.contains(x))
}

quickcheck! {
    fn fuzz_multiple_operations_one_based(ops: Vec<Op<i8>>) -> bool {
        fuzz::<OneBased>(ops)
    }

    fn fuzz_multiple_operations_zero_based(ops: Vec<Op<i8>>) -> bool {
        fuzz::<ZeroBased>(ops)
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree: ArrayBst<i8> = ArrayBst::new(CAPACITY);
        let mut inserted = Vec::new();
        for x in &xs {
            if tree.insert(*x).unwrap() {
                inserted.push(*x);
            }
        }

        inserted.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree: ArrayBst<i8> = ArrayBst::new(CAPACITY);
        for x in &xs {
            tree.insert(*x).unwrap();
        }
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: ArrayBst<i8> = ArrayBst::new(CAPACITY);
        let mut still_present = BTreeSet::new();
        for x in &xs {
            if tree.insert(*x).unwrap() {
                still_present.insert(*x);
            }
        }
        for delete in &deletes {
            tree.delete(delete).unwrap();
            still_present.remove(delete);
        }

        is_valid(&tree)
            && deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }

    fn traversal_is_strictly_ascending(xs: Vec<i8>) -> bool {
        let tree: ArrayBst<i8> = ArrayBst::from_values(xs);
        let values = tree.iter().collect::<Vec<_>>();

        values.len() == tree.len() && values.windows(2).all(|pair| pair[0] < pair[1])
    }

    // Random order keeps these trees shallow. Sorted input would need `2^len` slots.
    fn from_values_keeps_every_value(xs: Vec<i8>) -> bool {
        let expected: BTreeSet<_> = xs.iter().copied().collect();
        let tree: ArrayBst<i8> = ArrayBst::from_values(xs);

        is_valid(&tree) && tree.len() == expected.len() && tree.iter().eq(expected.iter())
    }

    fn from_values_zero_based_keeps_every_value(xs: Vec<i8>) -> bool {
        let expected: BTreeSet<_> = xs.iter().copied().collect();
        let tree = ArrayBst::<i8, ZeroBased>::from_values(xs);

        is_valid(&tree) && tree.iter().eq(expected.iter())
    }

    fn size_counts_successful_operations(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: ArrayBst<i8> = ArrayBst::new(CAPACITY);
        let inserts = xs.iter().filter(|x| tree.insert(**x).unwrap()).count();
        let removals = deletes.iter().filter(|x| tree.delete(*x).unwrap()).count();

        tree.len() == inserts - removals
    }
}
