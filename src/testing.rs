use crate::heap::{left_child, right_child, Heap};

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Panics if the active region of `heap` violates the min-heap property
pub fn assert_heap_property(heap: &Heap) {
    let active = heap.snapshot();
    for i in 0..active.len() {
        for &child in &[left_child(i), right_child(i)] {
            if child < active.len() {
                assert!(
                    active[i] <= active[child],
                    "heap property violated at {} -> {}: {:?}",
                    i,
                    child,
                    active
                );
            }
        }
    }
}

/// Extract every element, asserting the heap stays valid along the way
pub fn drain_checked(heap: &mut Heap) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.count());
    while !heap.is_empty() {
        out.push(heap.extract_min().unwrap());
        assert_heap_property(heap);
    }
    out
}
