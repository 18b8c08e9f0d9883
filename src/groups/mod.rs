//! Generators for named families of groups.
//!
//! Each generator emits a raw [`Table`](crate::Table) — total and
//! single-valued by construction — and the convenience `*_group` wrappers
//! push it through [`CayleyTable::new`](crate::CayleyTable::new) like any
//! other caller. The engine neither knows nor cares where a table came from.

pub mod cyclic;
pub mod dihedral;

use crate::cayley::Table;

/// The Klein four-group: e, a, b, c with every non-identity element
/// self-inverse and the product of any two of a, b, c equal to the third.
pub fn klein_four_table() -> Table<&'static str> {
    let elements = ["e", "a", "b", "c"];
    let mut table = Table::new();
    for (i, &x) in elements.iter().enumerate() {
        let mut row = std::collections::BTreeMap::new();
        for (j, &y) in elements.iter().enumerate() {
            // Index arithmetic in Z_2 x Z_2: e=00, a=01, b=10, c=11.
            row.insert(y, elements[i ^ j]);
        }
        table.insert(x, row);
    }
    table
}
