//! The dihedral group D_n: symmetries of the regular n-gon.
//!
//! D_n has order 2n — n rotations and n reflections — generated by a
//! rotation r and a reflection s with r^n = s^2 = e and s r = r^(n-1) s.
//! Elements are labelled `e, r, r^2, ..., r^(n-1), s, rs, r^2s, ...`.

use std::collections::BTreeMap;

use crate::cayley::{CayleyTable, Table, TableError};

/// Label for r^i or r^i s, with 0 <= i < n.
fn label(i: usize, reflected: bool) -> String {
    let rotation = match i {
        0 => String::new(),
        1 => "r".to_string(),
        _ => format!("r^{}", i),
    };
    match (i, reflected) {
        (0, false) => "e".to_string(),
        (_, false) => rotation,
        (0, true) => "s".to_string(),
        (_, true) => format!("{}s", rotation),
    }
}

/// The Cayley table of D_n, order 2n.
///
/// Products follow from the relations: a rotation composed with r^k s^l
/// adds exponents, while a reflection r^i s composed with r^k s^l flips the
/// rotation to r^(i-k) and toggles the reflection bit.
///
/// `n = 0` yields the empty table, which no validation accepts.
pub fn dihedral_table(n: usize) -> Table<String> {
    let mut table = Table::new();
    for i in 0..n {
        for left_reflected in [false, true] {
            let mut row = BTreeMap::new();
            for k in 0..n {
                for right_reflected in [false, true] {
                    let (m, reflected) = if left_reflected {
                        ((i + n - k) % n, !right_reflected)
                    } else {
                        ((i + k) % n, right_reflected)
                    };
                    row.insert(label(k, right_reflected), label(m, reflected));
                }
            }
            table.insert(label(i, left_reflected), row);
        }
    }
    table
}

/// D_n as a validated group.
pub fn dihedral_group(n: usize) -> Result<CayleyTable<String>, TableError<String>> {
    CayleyTable::new(dihedral_table(n))
}
