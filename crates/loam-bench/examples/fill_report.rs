//! Fill-and-report demo.
//!
//! Demonstrates: fill a `FixedArray` with seeded random values → print
//! them → watch a `DynamicArray`'s footprint grow in doubling steps as
//! elements are appended.

use loam_array::DynamicArray;
use loam_bench::random_fixed_array;

fn main() {
    println!("=== Loam Fill Report ===\n");

    let values = random_fixed_array(8, 42);
    println!("FixedArray({}) filled with seeded random values:", values.len());
    for (i, v) in values.iter().enumerate() {
        println!("  [{i}] {v:.6}");
    }

    println!("\nDynamicArray growth (capacity doubles on demand):");
    println!("  {:>6}  {:>8}  {:>14}", "length", "capacity", "size in bytes");
    let mut data = DynamicArray::new();
    for _ in 0..15 {
        println!(
            "  {:>6}  {:>8}  {:>14}",
            data.len(),
            data.capacity(),
            data.memory_bytes()
        );
        data.push(0u64);
    }
}
