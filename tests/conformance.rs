//! Conformance scenarios for `PleatList`: fixed literal fixtures plus
//! seeded randomized workloads run in lockstep against an array-backed
//! reference sequence.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pleat::ListError;
use pleat::PleatList;
use pleat::Sequence;

fn contents<T: Clone>(list: &PleatList<T>) -> Vec<T> {
    return list.iter().cloned().collect();
}

#[test]
fn append_snapshot_then_positional_access() {
    let mut list = PleatList::new();
    for i in 0..10 {
        list.push(format!("B{}", i));
    }
    list.snapshot();

    assert_eq!(list.len(), 10);
    assert_eq!(list.get(0), Ok(&"B0".to_string()));
    assert_eq!(list.get(9), Ok(&"B9".to_string()));
    assert_eq!(
        list.get(10),
        Err(ListError::OutOfRange { index: 10, len: 10 })
    );
}

#[test]
fn insert_near_the_end_then_undo_it() {
    let mut list = PleatList::new();
    for i in 0..10 {
        list.push(format!("B{}", i));
    }
    list.snapshot();
    let flat = list.structure();

    list.insert(9, "I0".to_string()).unwrap();
    assert_eq!(list.get(9), Ok(&"I0".to_string()));
    assert_eq!(list.get(10), Ok(&"B9".to_string()));
    assert_eq!(list.len(), 11);

    assert_eq!(list.remove(9), Ok("I0".to_string()));
    assert_eq!(list.get(9), Ok(&"B9".to_string()));
    assert_eq!(list.len(), 10);
    // The insert/remove pair leaves no residue: the structure dump is
    // byte-identical to the freshly snapshotted one.
    assert_eq!(list.structure(), flat);
}

#[test]
fn descending_removals_through_the_backbone() {
    let mut list = PleatList::new();
    for i in 0..10 {
        list.push(format!("B{}", i));
    }
    list.snapshot();

    list.remove(7).unwrap();
    list.remove(6).unwrap();
    list.remove(3).unwrap();

    let expected: Vec<String> = ["B0", "B1", "B2", "B4", "B5", "B8", "B9"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(contents(&list), expected);
    assert_eq!(list.len(), 7);
    assert_eq!(list.get(7), Err(ListError::OutOfRange { index: 7, len: 7 }));
}

#[test]
fn snapshot_never_changes_observable_state() {
    let mut list: PleatList<i32> = (0..30).collect();
    list.snapshot();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..60 {
        let index = rng.gen_range(0..=list.len());
        if rng.gen_bool(0.5) {
            list.insert(index, rng.r#gen()).unwrap();
        } else if !list.is_empty() {
            let index = index.min(list.len() - 1);
            list.remove(index).unwrap();
        }

        let before = contents(&list);
        let len = list.len();
        list.snapshot();
        assert_eq!(list.len(), len);
        assert_eq!(contents(&list), before);
        for (i, expected) in before.iter().enumerate() {
            assert_eq!(list.get(i), Ok(expected));
        }
    }
}

#[test]
fn cursor_fail_fast_contract() {
    let mut list: PleatList<i32> = (0..10).collect();
    list.snapshot();

    // Outside structural edit invalidates the cursor.
    let mut cursor = list.cursor();
    list.remove(5).unwrap();
    assert_eq!(cursor.next(&list), Err(ListError::StaleCursor));

    // A cursor's own edits never invalidate it.
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();
    cursor.insert(&mut list, 100).unwrap();
    cursor.next(&list).unwrap();
    cursor.remove(&mut list).unwrap();
    assert!(cursor.next(&list).is_ok());
}

#[test]
fn equal_contents_compare_equal_across_internal_states() {
    let mut bursty: PleatList<i32> = PleatList::new();
    for i in 0..12 {
        bursty.push(i);
    }
    bursty.snapshot();
    bursty.remove(4).unwrap();
    bursty.insert(4, 4).unwrap();
    bursty.insert(6, 100).unwrap();
    bursty.remove(6).unwrap();

    let plain: PleatList<i32> = (0..12).collect();
    assert_eq!(bursty, plain);
    assert_eq!(bursty, (0..12).collect::<Vec<i32>>());
}

#[test]
fn remove_range_matches_reference() {
    for (from, to) in [(0, 0), (0, 3), (2, 9), (5, 12), (0, 12), (12, 12)] {
        let mut list: PleatList<i32> = (0..12).collect();
        list.snapshot();
        let mut reference: Vec<i32> = (0..12).collect();

        list.remove_range(from, to).unwrap();
        reference.drain(from..to);
        assert_eq!(list, reference, "range {}..{}", from, to);
    }
}

/// Mirror of the original driver's randomized workload: random positional
/// add/get/remove applied in lockstep to the pleated list and a `Vec`
/// through the shared `Sequence` trait, with contents compared after every
/// operation.
fn random_lockstep(seed: u64, ops: usize, warm: usize, snapshot_every: Option<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list: PleatList<i64> = PleatList::new();
    let mut reference: Vec<i64> = Vec::new();

    for _ in 0..warm {
        let value = rng.r#gen();
        Sequence::push(&mut list, value);
        Sequence::push(&mut reference, value);
    }
    list.snapshot();

    for step in 0..ops {
        match rng.gen_range(0..4) {
            0 => {
                let value = rng.r#gen();
                let index = rng.gen_range(0..=reference.len());
                list.insert(index, value).unwrap();
                Vec::insert(&mut reference, index, value);
            }
            1 if !reference.is_empty() => {
                let index = rng.gen_range(0..reference.len());
                assert_eq!(list.get(index), Ok(&reference[index]));
            }
            2 if !reference.is_empty() => {
                let index = rng.gen_range(0..reference.len());
                assert_eq!(
                    PleatList::remove(&mut list, index).unwrap(),
                    Vec::remove(&mut reference, index)
                );
            }
            3 if !reference.is_empty() => {
                let value = rng.r#gen();
                let index = rng.gen_range(0..reference.len());
                let old = reference[index];
                assert_eq!(list.set(index, value), Ok(old));
                reference[index] = value;
            }
            _ => {}
        }

        if let Some(every) = snapshot_every {
            if step % every == 0 {
                list.snapshot();
            }
        }
        assert_eq!(list, reference);
    }
}

#[test]
fn random_ops_agree_with_reference() {
    random_lockstep(0xB0B, 400, 50, None);
}

#[test]
fn random_ops_agree_with_reference_under_periodic_snapshots() {
    random_lockstep(0xCAFE, 400, 50, Some(37));
}

#[test]
fn random_ops_agree_from_empty() {
    random_lockstep(9, 300, 0, Some(50));
}

/// Mirror of the original driver's iterator workload: walk forward over the
/// whole list, occasionally inserting or removing at the cursor, then walk
/// all the way back doing the same, comparing against a `Vec` model.
#[test]
fn random_cursor_passes_agree_with_reference() {
    let mut rng = StdRng::seed_from_u64(0xF00D);
    let mut list: PleatList<i64> = PleatList::new();
    let mut model: Vec<i64> = Vec::new();
    for _ in 0..200 {
        let value = rng.r#gen();
        list.push(value);
        model.push(value);
    }
    list.snapshot();

    for _ in 0..4 {
        let mut cursor = list.cursor();
        let mut pos = 0usize;

        while cursor.has_next() {
            assert_eq!(cursor.next(&list), Ok(&model[pos]));
            pos += 1;
            match rng.gen_range(0..10) {
                0 => {
                    let value = rng.r#gen();
                    cursor.insert(&mut list, value).unwrap();
                    model.insert(pos, value);
                    pos += 1;
                }
                1 => {
                    assert_eq!(cursor.remove(&mut list).unwrap(), model.remove(pos - 1));
                    pos -= 1;
                }
                _ => {}
            }
        }
        assert_eq!(pos, model.len());

        while cursor.has_prev() {
            pos -= 1;
            assert_eq!(cursor.prev(&list), Ok(&model[pos]));
            match rng.gen_range(0..10) {
                0 => {
                    let value = rng.r#gen();
                    cursor.insert(&mut list, value).unwrap();
                    model.insert(pos, value);
                    pos += 1;
                }
                1 => {
                    assert_eq!(cursor.remove(&mut list).unwrap(), model.remove(pos));
                }
                _ => {}
            }
        }
        assert_eq!(pos, 0);
        assert_eq!(list, model);
    }
}
