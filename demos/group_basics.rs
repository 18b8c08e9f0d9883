//! Cayley-Table Basics
//!
//! This example demonstrates core `CayleyTable` operations including:
//! - Validating a multiplication table as a group
//! - Identity, inverses, and element orders
//! - Telling abelian and non-abelian groups apart
//!
//! Run with: cargo run --example group_basics

use cayley::{cyclic, dihedral, CayleyTable, TableError};

fn main() {
    println!("=== Cayley-Table Basics ===\n");

    cyclic_group_of_order_6();
    dihedral_group_of_order_6();
    a_table_that_is_not_a_group();
}

fn cyclic_group_of_order_6() {
    println!("--- Z_6, addition mod 6 ---\n");

    let group = cyclic::cyclic_group(6).expect("Z_6 is a group");

    println!("order = {}", group.order());
    println!("identity = {}", group.identity().unwrap());
    println!("abelian? {}", group.is_abelian());
    println!("cyclic?  {}", group.is_cyclic().unwrap());

    for element in group.elements() {
        println!(
            "  order({}) = {:?}, inverse({}) = {:?}",
            element,
            group.element_order(element).unwrap().unwrap(),
            element,
            group.inverse(element).unwrap().unwrap(),
        );
    }
    println!();
}

fn dihedral_group_of_order_6() {
    println!("--- D_3, symmetries of the triangle ---\n");

    let group = dihedral::dihedral_group(3).expect("D_3 is a group");

    println!("order = {}", group.order());
    println!("abelian? {} (rotations and reflections do not commute)", group.is_abelian());

    let r = "r".to_string();
    let s = "s".to_string();
    println!("s * r = {}", group.op(&s, &r).unwrap());
    println!("r * s = {}", group.op(&r, &s).unwrap());
    println!("elements of order 2: {:?}", group.elements_of_order(2).unwrap());
    println!();
}

fn a_table_that_is_not_a_group() {
    println!("--- A broken table ---\n");

    // Z_3 with one cell overwritten by an out-of-set value.
    let mut table = cyclic::cyclic_table(3);
    table.get_mut(&2).unwrap().insert(2, 9);

    match CayleyTable::new(table) {
        Ok(_) => unreachable!("the table is broken"),
        Err(TableError::NotAGroup(failure)) => println!("rejected: {}", failure),
        Err(other) => println!("rejected: {}", other),
    }
    println!();
}
