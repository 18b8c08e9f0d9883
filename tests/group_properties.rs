use proptest::prelude::*;

use cayley::{cyclic, dihedral, restrict, CayleyTable};

/// A cyclic group of small random order, together with three sampled
/// elements.
fn cyclic_with_triple() -> impl Strategy<Value = (CayleyTable<u64>, u64, u64, u64)> {
    (1u64..=10).prop_flat_map(|n| {
        let group = cyclic::cyclic_group(n as usize).expect("Z_n is a group");
        (Just(group), 0..n, 0..n, 0..n)
    })
}

/// A dihedral group of small random order, together with three sampled
/// element indices.
fn dihedral_with_indices() -> impl Strategy<Value = (CayleyTable<String>, usize, usize, usize)> {
    (1usize..=5).prop_flat_map(|n| {
        let group = dihedral::dihedral_group(n).expect("D_n is a group");
        let order = group.order();
        (Just(group), 0..order, 0..order, 0..order)
    })
}

// ===== Axiom round-trips on validated groups =====

proptest! {
    #[test]
    fn cyclic_associativity((group, a, b, c) in cyclic_with_triple()) {
        let ab = *group.op(&a, &b).unwrap();
        let bc = *group.op(&b, &c).unwrap();
        prop_assert_eq!(group.op(&ab, &c).unwrap(), group.op(&a, &bc).unwrap());
    }
}

proptest! {
    #[test]
    fn dihedral_associativity((group, i, j, k) in dihedral_with_indices()) {
        let (a, b, c) = (
            group.elements()[i].clone(),
            group.elements()[j].clone(),
            group.elements()[k].clone(),
        );
        let ab = group.op(&a, &b).unwrap().clone();
        let bc = group.op(&b, &c).unwrap().clone();
        prop_assert_eq!(group.op(&ab, &c).unwrap(), group.op(&a, &bc).unwrap());
    }
}

proptest! {
    #[test]
    fn inverse_round_trip((group, a, _b, _c) in cyclic_with_triple()) {
        let identity = group.identity().unwrap();
        let inv = group.inverse(&a).unwrap().expect("validated groups are invertible");
        prop_assert_eq!(*group.op(&a, &inv).unwrap(), identity);
        prop_assert_eq!(*group.op(&inv, &a).unwrap(), identity);
        prop_assert_eq!(group.inverse(&inv).unwrap(), Some(a));
    }
}

proptest! {
    #[test]
    fn dihedral_inverse_of_inverse((group, i, _j, _k) in dihedral_with_indices()) {
        let a = group.elements()[i].clone();
        let inv = group.inverse(&a).unwrap().expect("validated groups are invertible");
        prop_assert_eq!(group.inverse(&inv).unwrap(), Some(a));
    }
}

// ===== Lagrange: element orders divide the group order =====

proptest! {
    #[test]
    fn cyclic_element_orders_divide((group, a, _b, _c) in cyclic_with_triple()) {
        let m = group.element_order(&a).unwrap().expect("finite order in a finite group");
        prop_assert_eq!(group.order() % m, 0);
    }
}

proptest! {
    #[test]
    fn dihedral_element_orders_divide((group, i, _j, _k) in dihedral_with_indices()) {
        let a = group.elements()[i].clone();
        let m = group.element_order(&a).unwrap().expect("finite order in a finite group");
        prop_assert_eq!(group.order() % m, 0);
    }
}

// ===== Commutativity verdicts =====

proptest! {
    #[test]
    fn cyclic_groups_are_abelian(n in 1usize..=12) {
        let group = cyclic::cyclic_group(n).unwrap();
        prop_assert!(group.is_abelian());
        prop_assert!(group.is_cyclic().unwrap());
    }
}

proptest! {
    #[test]
    fn dihedral_groups_are_nonabelian_from_d3(n in 3usize..=6) {
        let group = dihedral::dihedral_group(n).unwrap();
        prop_assert!(!group.is_abelian());
        prop_assert!(!group.is_cyclic().unwrap());
    }
}

// ===== Subgroups and restriction =====

proptest! {
    /// The cyclic subgroup generated by any single element is a subgroup.
    #[test]
    fn generated_subsets_are_subgroups((group, i, _j, _k) in dihedral_with_indices()) {
        let x = group.elements()[i].clone();
        let mut generated = vec![group.identity().unwrap()];
        let mut power = x.clone();
        while !generated.contains(&power) {
            generated.push(power.clone());
            power = group.op(&power, &x).unwrap().clone();
        }
        prop_assert!(group.is_subgroup(&generated).unwrap());
    }
}

proptest! {
    #[test]
    fn rotations_form_a_subgroup(n in 1usize..=6) {
        let group = dihedral::dihedral_group(n).unwrap();
        let rotations: Vec<String> = group
            .elements()
            .iter()
            .filter(|label| !label.ends_with('s'))
            .cloned()
            .collect();
        prop_assert_eq!(rotations.len(), n);
        prop_assert!(group.is_subgroup(&rotations).unwrap());
    }
}

proptest! {
    #[test]
    fn restriction_is_idempotent(n in 1u64..=10, subset in proptest::collection::btree_set(0u64..10, 0..=10)) {
        let table = cyclic::cyclic_table(n as usize);
        let items: Vec<u64> = subset.into_iter().filter(|x| *x < n).collect();
        let once = restrict(&items, &table).unwrap();
        let twice = restrict(&items, &once).unwrap();
        prop_assert_eq!(once, twice);
    }
}

proptest! {
    /// Proper nontrivial subsets that skip the identity are never subgroups.
    #[test]
    fn subsets_without_identity_are_not_subgroups(n in 2u64..=10, start in 1u64..10) {
        let group = cyclic::cyclic_group(n as usize).unwrap();
        let start = 1 + start % (n - 1);
        let items: Vec<u64> = (start..n).collect();
        prop_assert!(!group.is_subgroup(&items).unwrap());
    }
}
