//! AFL fuzz harness for `IndexSequence`
//!
//! Two sequences, one per capacity strategy, replay the same operations as
//! a `Vec` model. After every operation both must hold exactly the model's
//! items and keep their bounds inside the buffer.

use afl::fuzz;
use linstore::capacity::AmortizedCapacityStrategy;
use linstore::capacity::CapacityStrategy;
use linstore::sequence::IndexSequence;
use linstore::sequence::SequenceOptions;
use linstore::storage::ContentIndexRegistry;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { pos_frac: u8, len: u8 },
    Remove { pos_frac: u8 },
    Replace { pos_frac: u8, value: u8 },
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 8;
        let rest = &bytes[1..];

        match op_type {
            0..=3 if rest.len() >= 2 => {
                let op = FuzzOp::Insert {
                    pos_frac: rest[0],
                    len: rest[1] % 8, // 0-7 items
                };
                Some((op, &rest[2..]))
            }
            4 | 5 if !rest.is_empty() => Some((FuzzOp::Remove { pos_frac: rest[0] }, &rest[1..])),
            6 if rest.len() >= 2 => {
                let op = FuzzOp::Replace { pos_frac: rest[0], value: rest[1] };
                Some((op, &rest[2..]))
            }
            7 => Some((FuzzOp::Clear, rest)),
            _ => None,
        }
    }
}

fn position(pos_frac: u8, len: usize) -> usize {
    return (pos_frac as usize * len / 256).min(len);
}

fn apply<P: CapacityStrategy>(sequence: &mut IndexSequence<u32, P>, op: FuzzOp, counter: u32, model: &[u32]) {
    let base = sequence.first_index();
    match op {
        FuzzOp::Insert { pos_frac, len } => {
            let at = position(pos_frac, model.len());
            let items: Vec<u32> = (0..len as u32).map(|i| counter + i).collect();
            sequence.insert_all(base + at, items).unwrap();
        }
        FuzzOp::Remove { pos_frac } => {
            if model.is_empty() {
                assert!(sequence.remove(base).is_err());
            } else {
                let at = position(pos_frac, model.len() - 1);
                sequence.remove(base + at).unwrap();
            }
        }
        FuzzOp::Replace { pos_frac, value } => {
            if !model.is_empty() {
                let at = position(pos_frac, model.len() - 1);
                sequence.replace(base + at, value as u32).unwrap();
            }
        }
        FuzzOp::Clear => sequence.clear(),
    }
}

fn check<P: CapacityStrategy>(sequence: &IndexSequence<u32, P>, model: &[u32]) {
    let storage = sequence.storage();
    assert!(storage.first_item_index() <= storage.bounds().end_index());
    assert!(storage.bounds().end_index() <= storage.capacity());
    assert_eq!(sequence.to_vec(), model, "sequence diverged from model");
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut minimal: IndexSequence<u32> = IndexSequence::new();
        let options = SequenceOptions { first_index: 1 };
        let mut amortized = IndexSequence::with_options(options, AmortizedCapacityStrategy::default());
        let mut model: Vec<u32> = Vec::new();
        let mut counter = 0u32;
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            apply(&mut minimal, op, counter, &model);
            apply(&mut amortized, op, counter, &model);

            match op {
                FuzzOp::Insert { pos_frac, len } => {
                    let at = position(pos_frac, model.len());
                    model.splice(at..at, (0..len as u32).map(|i| counter + i));
                    counter += len as u32;
                }
                FuzzOp::Remove { pos_frac } => {
                    if !model.is_empty() {
                        let at = position(pos_frac, model.len() - 1);
                        model.remove(at);
                    }
                }
                FuzzOp::Replace { pos_frac, value } => {
                    if !model.is_empty() {
                        let at = position(pos_frac, model.len() - 1);
                        model[at] = value as u32;
                    }
                }
                FuzzOp::Clear => model.clear(),
            }

            check(&minimal, &model);
            check(&amortized, &model);
        }
    });
}
