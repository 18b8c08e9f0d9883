//! The cyclic group Z_n: integers 0..n under addition mod n.

use std::collections::BTreeMap;

use crate::cayley::{CayleyTable, Table, TableError};

/// The Cayley table of Z_n: `table[i][j] = (i + j) mod n`.
///
/// `n = 0` yields the empty table, which no validation accepts.
pub fn cyclic_table(n: usize) -> Table<u64> {
    let n = n as u64;
    let mut table = Table::new();
    for i in 0..n {
        let mut row = BTreeMap::new();
        for j in 0..n {
            row.insert(j, (i + j) % n);
        }
        table.insert(i, row);
    }
    table
}

/// Z_n as a validated group.
pub fn cyclic_group(n: usize) -> Result<CayleyTable<u64>, TableError<u64>> {
    CayleyTable::new(cyclic_table(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_cyclic_groups_validate() {
        for n in 1..=8 {
            let group = cyclic_group(n).unwrap();
            assert_eq!(group.order(), n);
            assert_eq!(group.identity().unwrap(), 0);
            assert!(group.is_abelian());
            assert!(group.is_cyclic().unwrap());
        }
    }

    #[test]
    fn inverse_is_the_modular_complement() {
        let group = cyclic_group(7).unwrap();
        for i in 1..7u64 {
            assert_eq!(group.inverse(&i).unwrap(), Some(7 - i));
        }
    }

    #[test]
    fn zero_elements_is_rejected() {
        assert!(cyclic_group(0).is_err());
    }
}
