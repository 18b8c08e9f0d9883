//! Subgroup Hunting
//!
//! This example restricts the Cayley table of D_4 (the symmetries of the
//! square, order 8) to various subsets and asks which ones form subgroups.
//!
//! Run with: cargo run --example subgroups

use cayley::{dihedral, restrict, CayleyTable};

fn main() {
    println!("=== Subgroups of D_4 ===\n");

    let group = dihedral::dihedral_group(4).expect("D_4 is a group");
    println!("elements: {:?}\n", group.elements());

    let subsets: [&[&str]; 5] = [
        &["e"],
        &["e", "r^2"],
        &["e", "r", "r^2", "r^3"],
        &["s", "rs", "r^2s", "r^3s"],
        &["e", "r"],
    ];

    for subset in subsets {
        let items: Vec<String> = subset.iter().map(|s| s.to_string()).collect();
        let verdict = group.is_subgroup(&items).unwrap();
        println!("{:?} subgroup? {}", subset, verdict);
    }

    // The rotation subgroup is itself a validated cyclic group of order 4.
    let rotations: Vec<String> = ["e", "r", "r^2", "r^3"].iter().map(|s| s.to_string()).collect();
    let table = restrict(&rotations, group.table()).unwrap();
    let rotation_group = CayleyTable::new(table).expect("rotations close under composition");

    println!(
        "\nrotations alone: order {}, abelian? {}, cyclic? {}",
        rotation_group.order(),
        rotation_group.is_abelian(),
        rotation_group.is_cyclic().unwrap(),
    );
}
