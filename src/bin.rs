use log::info;
use rand::Rng;

use min_heap::{Heap, HeapError};

const NUM_INSERTS: usize = 1_000_000;

pub fn fill_and_drain(num_inserts: usize) -> Result<(), HeapError> {
    let mut rng = rand::thread_rng();
    let mut heap = Heap::new();
    for _ in 0..num_inserts {
        heap.insert(rng.gen());
    }
    info!(
        "inserted {} values, storage capacity {}",
        heap.count(),
        heap.capacity()
    );

    let mut previous = i32::MIN;
    let mut sorted = true;
    while heap.count() > 0 {
        let value = heap.extract_min()?;
        sorted &= previous <= value;
        previous = value;
    }
    info!("drained heap, extraction sorted: {}", sorted);
    Ok(())
}

pub fn main() -> Result<(), HeapError> {
    env_logger::init();
    fill_and_drain(NUM_INSERTS)?;
    println!("Done.");
    Ok(())
}
