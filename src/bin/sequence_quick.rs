// Quick timing summary for both capacity strategies

use std::time::Instant;

use linstore::capacity::AmortizedCapacityStrategy;
use linstore::capacity::CapacityStrategy;
use linstore::capacity::MinimalCapacityStrategy;
use linstore::sequence::IndexSequence;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ITEMS: u32 = 2_000;

fn time_ops<F: Fn() -> usize>(f: F, iterations: usize) -> f64 {
    // Warmup
    for _ in 0..3 {
        let _ = f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = f();
    }
    return start.elapsed().as_nanos() as f64 / iterations as f64;
}

fn run<P: CapacityStrategy + Default>(name: &str) {
    let append = time_ops(
        || {
            let mut sequence: IndexSequence<u32, P> = IndexSequence::with_strategy(P::default());
            for i in 0..ITEMS {
                sequence.append(i).unwrap();
            }
            sequence.len()
        },
        20,
    );

    let prepend = time_ops(
        || {
            let mut sequence: IndexSequence<u32, P> = IndexSequence::with_strategy(P::default());
            for i in 0..ITEMS {
                sequence.prepend(i).unwrap();
            }
            sequence.len()
        },
        20,
    );

    let random = time_ops(
        || {
            let mut sequence: IndexSequence<u32, P> = IndexSequence::with_strategy(P::default());
            let mut rng = StdRng::seed_from_u64(42);
            for i in 0..ITEMS {
                let at = rng.gen_range(0..=sequence.len());
                sequence.insert(at, i).unwrap();
            }
            sequence.len()
        },
        20,
    );

    println!(
        "{:<10} append {:>10.0}ns  prepend {:>10.0}ns  random {:>10.0}ns",
        name, append, prepend, random
    );
}

fn main() {
    println!("{} items per run", ITEMS);
    run::<MinimalCapacityStrategy>("minimal");
    run::<AmortizedCapacityStrategy>("amortized");
}
