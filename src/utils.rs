use crate::cayley::{Element, Table, TableError};

/// Check if `n` is a prime number.
///
/// Trial division over the 6k±1 candidates: every prime above 3 is congruent
/// to 1 or 5 mod 6. Group orders of interest are small, so a deterministic
/// scan is plenty.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// The sub-table of `table` whose keys and inner keys are exactly `items`.
///
/// Empty `items` yields the empty table. Produced values are copied as-is and
/// may fall outside `items` — the restriction of a group table to an
/// arbitrary subset is allowed to break closure (or any other axiom); whether
/// it does is precisely what a subgroup test asks.
///
/// # Errors
///
/// [`TableError::MissingElements`] if any item is absent from the outer key
/// set (all offenders listed), or if some required cell `table[i][j]` is
/// undefined. A restriction never drops a required cell silently and never
/// fabricates a value.
pub fn restrict<E: Element>(items: &[E], table: &Table<E>) -> Result<Table<E>, TableError<E>> {
    let missing: Vec<E> = items
        .iter()
        .filter(|item| !table.contains_key(item))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(TableError::MissingElements(missing));
    }

    let mut restricted = Table::new();
    for row in items {
        let cells = &table[row];
        let mut sub_row = std::collections::BTreeMap::new();
        for col in items {
            match cells.get(col) {
                Some(value) => {
                    sub_row.insert(col.clone(), value.clone());
                }
                None => return Err(TableError::MissingElements(vec![col.clone()])),
            }
        }
        restricted.insert(row.clone(), sub_row);
    }
    Ok(restricted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups;

    #[test]
    fn small_primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(is_prime(7));
        assert!(!is_prime(9));
        assert!(is_prime(11));
        assert!(is_prime(13));
        assert!(!is_prime(15));
        assert!(is_prime(23));
    }

    #[test]
    fn composites_and_larger_primes() {
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(100));
        assert!(is_prime(101));
        assert!(is_prime(1009));
        assert!(is_prime(104729));
    }

    #[test]
    fn empty_items_yield_the_empty_table() {
        let table = groups::cyclic::cyclic_table(4);
        assert_eq!(restrict(&[], &table).unwrap(), Table::new());
    }

    #[test]
    fn restriction_keeps_only_the_requested_cells() {
        let table = groups::cyclic::cyclic_table(4);
        let sub = restrict(&[0, 2], &table).unwrap();
        assert_eq!(sub.len(), 2);
        assert_eq!(sub[&0][&2], 2);
        assert_eq!(sub[&2][&2], 0);
        assert!(!sub[&0].contains_key(&1));
    }

    #[test]
    fn restriction_may_break_closure() {
        // {1, 2} in Z_4: 1 + 1 = 2 but 1 + 2 = 3, outside the subset.
        let table = groups::cyclic::cyclic_table(4);
        let sub = restrict(&[1, 2], &table).unwrap();
        assert_eq!(sub[&1][&2], 3);
    }

    #[test]
    fn restriction_is_idempotent() {
        let table = groups::dihedral::dihedral_table(4);
        let items: Vec<String> = ["e", "r^2", "s", "r^2s"]
            .into_iter()
            .map(String::from)
            .collect();
        let once = restrict(&items, &table).unwrap();
        let twice = restrict(&items, &once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_items_are_all_reported() {
        let table = groups::cyclic::cyclic_table(3);
        assert_eq!(
            restrict(&[0, 7, 9], &table),
            Err(TableError::MissingElements(vec![7, 9]))
        );
    }
}
