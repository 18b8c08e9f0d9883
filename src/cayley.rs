//! The Cayley-table engine.
//!
//! A Cayley table for a finite structure (G, *) with n elements is an n-by-n
//! table whose (a, b) entry is the value a * b. Nearly every property of a
//! finite group can be read off its Cayley table, so the group-theoretic
//! computations live here: axiom verification at construction time, then
//! queries (identity, inverses, element orders, abelian-ness, subgroup tests)
//! against the validated table.
//!
//! Tables are plain nested `BTreeMap`s so that callers can build them by
//! hand, from a generator in [`crate::groups`], or from a config file, and
//! hand them over fully materialized. The ordered map also gives every scan a
//! deterministic iteration order.

use core::fmt;
use std::collections::{BTreeMap, BTreeSet};

use crate::utils::{is_prime, restrict};

/// A raw multiplication table: `table[a][b]` is the value `a * b`.
///
/// The declared element set is exactly the outer key set. A well-shaped table
/// is total: every declared pair has an entry.
pub type Table<E> = BTreeMap<E, BTreeMap<E, E>>;

/// A value that can label a group element.
///
/// Elements are opaque to the engine: anything clonable with a total order
/// works (the order is only used for deterministic iteration, never for
/// group-theoretic meaning). String-like labels must be non-empty.
pub trait Element: Clone + Ord + fmt::Debug {
    /// Whether this value may label an element. Defaults to `true`;
    /// string-like types override this to reject the empty string.
    fn is_valid_label(&self) -> bool {
        true
    }
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(impl Element for $t {})*
    };
}

impl_element!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);

impl Element for String {
    fn is_valid_label(&self) -> bool {
        !self.is_empty()
    }
}

impl<'a> Element for &'a str {
    fn is_valid_label(&self) -> bool {
        !self.is_empty()
    }
}

// ============================================================================
// Error taxonomy
// ============================================================================

/// A table that is malformed before any axiom can be asked about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDefect<E> {
    /// An element label failed [`Element::is_valid_label`].
    EmptyLabel(E),
    /// The table has no entry for the declared pair `(row, col)`.
    MissingEntry { row: E, col: E },
    /// A row carries an entry for a column that is not a declared element.
    UndeclaredEntry { row: E, col: E },
}

/// A well-shaped table that fails one of the group axioms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxiomFailure<E> {
    /// `row * col` produced a value outside the declared element set.
    NotClosed { row: E, col: E, value: E },
    /// No element acts as a left identity.
    NoIdentity,
    /// The given element has no two-sided inverse.
    NoInverse(E),
    /// `(a * b) * c != a * (b * c)`.
    NotAssociative { a: E, b: E, c: E },
}

/// A well-shaped table with multiplicity where a group demands uniqueness.
///
/// Distinguished from [`AxiomFailure`]: a structure can honestly fail to be a
/// group (no identity, a missing inverse), but two identities or two inverses
/// signal an internally inconsistent, likely hand-mistyped table, and that is
/// worth surfacing separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ambiguity<E> {
    /// More than one element satisfies the left-identity condition.
    MultipleIdentities(Vec<E>),
    /// An element with more than one two-sided inverse.
    MultipleInverses { element: E, inverses: Vec<E> },
}

/// Error type for table construction, validation, and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError<E> {
    /// Malformed input: bad label or non-total table.
    InvalidInput(InputDefect<E>),
    /// Well-shaped table that is not a group.
    NotAGroup(AxiomFailure<E>),
    /// Well-shaped table with contradictory multiplicities.
    AmbiguousStructure(Ambiguity<E>),
    /// A query named a value outside the declared element set.
    NotAnElement(E),
    /// A restriction referenced elements missing from the source table.
    MissingElements(Vec<E>),
}

impl<E: fmt::Debug> fmt::Display for InputDefect<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputDefect::EmptyLabel(e) => {
                write!(f, "{:?} is not a valid element label", e)
            }
            InputDefect::MissingEntry { row, col } => {
                write!(f, "table has no entry for ({:?}, {:?})", row, col)
            }
            InputDefect::UndeclaredEntry { row, col } => {
                write!(
                    f,
                    "row {:?} has an entry for {:?}, which is not a declared element",
                    row, col
                )
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Display for AxiomFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxiomFailure::NotClosed { row, col, value } => {
                write!(
                    f,
                    "not closed: {:?} * {:?} = {:?}, which is not an element",
                    row, col, value
                )
            }
            AxiomFailure::NoIdentity => write!(f, "no identity element"),
            AxiomFailure::NoInverse(e) => write!(f, "{:?} has no inverse", e),
            AxiomFailure::NotAssociative { a, b, c } => {
                write!(
                    f,
                    "not associative: ({:?} * {:?}) * {:?} != {:?} * ({:?} * {:?})",
                    a, b, c, a, b, c
                )
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Ambiguity<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ambiguity::MultipleIdentities(candidates) => {
                write!(f, "identity is not unique: {:?}", candidates)
            }
            Ambiguity::MultipleInverses { element, inverses } => {
                write!(f, "{:?} has more than one inverse: {:?}", element, inverses)
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Display for TableError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidInput(defect) => write!(f, "invalid input: {}", defect),
            TableError::NotAGroup(failure) => write!(f, "not a group: {}", failure),
            TableError::AmbiguousStructure(ambiguity) => {
                write!(f, "ambiguous table: {}", ambiguity)
            }
            TableError::NotAnElement(e) => {
                write!(f, "{:?} is not an element of the structure", e)
            }
            TableError::MissingElements(missing) => {
                write!(f, "missing from the table: {:?}", missing)
            }
        }
    }
}

impl<E: fmt::Debug> std::error::Error for TableError<E> {}

// ============================================================================
// CayleyTable
// ============================================================================

/// A finite group, validated from its Cayley table.
///
/// Construction through [`CayleyTable::new`] checks the table's shape and
/// then all four group axioms; an instance therefore always represents an
/// actual group, and is immutable afterwards. Queries recompute from the raw
/// table on every call — tables of interest are small, and recomputation
/// keeps the type trivially correct.
///
/// # Example
///
/// ```
/// use cayley::{groups, CayleyTable};
///
/// // Z_4 under addition mod 4
/// let group = CayleyTable::new(groups::cyclic::cyclic_table(4)).unwrap();
///
/// assert_eq!(group.order(), 4);
/// assert_eq!(group.identity().unwrap(), 0);
/// assert_eq!(group.inverse(&3).unwrap(), Some(1));
/// assert!(group.is_abelian());
/// assert_eq!(group.element_order(&1).unwrap(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CayleyTable<E: Element> {
    table: Table<E>,
    elements: Vec<E>,
}

impl<E: Element> CayleyTable<E> {
    /// Validate `table` as the Cayley table of a group.
    ///
    /// Shape first: every label must pass [`Element::is_valid_label`] and the
    /// table must be total over its declared element set. Then the axioms, in
    /// order: closure, a unique identity, a unique two-sided inverse for
    /// every element, associativity over all ordered triples (O(n³), fine
    /// for the small tables this is meant for).
    ///
    /// # Errors
    ///
    /// - [`TableError::InvalidInput`] for a malformed table,
    /// - [`TableError::NotAGroup`] when a well-shaped table fails an axiom,
    /// - [`TableError::AmbiguousStructure`] when identities or inverses are
    ///   not unique — an internally inconsistent table rather than an honest
    ///   non-group.
    pub fn new(table: Table<E>) -> Result<Self, TableError<E>> {
        let candidate = Self::new_unchecked(table)?;
        candidate.validate()?;
        Ok(candidate)
    }

    /// Shape-check only: labels and totality, no axiom verification.
    ///
    /// Used by [`CayleyTable::is_subgroup`] to hold a restriction while it is
    /// re-validated; a restriction is expected to violate axioms, which is
    /// exactly what the subgroup test asks. Deliberately not public so the
    /// group invariant cannot be bypassed from outside the crate.
    pub(crate) fn new_unchecked(table: Table<E>) -> Result<Self, TableError<E>> {
        for row in table.keys() {
            if !row.is_valid_label() {
                return Err(TableError::InvalidInput(InputDefect::EmptyLabel(row.clone())));
            }
        }
        for (row, cells) in &table {
            for col in table.keys() {
                if !cells.contains_key(col) {
                    return Err(TableError::InvalidInput(InputDefect::MissingEntry {
                        row: row.clone(),
                        col: col.clone(),
                    }));
                }
            }
            // Label hygiene covers the whole row: inner keys and produced
            // values, not just the declared pairs. A bad label is a malformed
            // table, never a mere axiom failure.
            for (col, value) in cells {
                if !col.is_valid_label() {
                    return Err(TableError::InvalidInput(InputDefect::EmptyLabel(col.clone())));
                }
                if !table.contains_key(col) {
                    return Err(TableError::InvalidInput(InputDefect::UndeclaredEntry {
                        row: row.clone(),
                        col: col.clone(),
                    }));
                }
                if !value.is_valid_label() {
                    return Err(TableError::InvalidInput(InputDefect::EmptyLabel(
                        value.clone(),
                    )));
                }
            }
        }
        let elements: Vec<E> = table.keys().cloned().collect();
        Ok(Self { table, elements })
    }

    /// The declared elements, in the table's deterministic order.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// The number of elements (the order of the group).
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// The underlying raw table.
    pub fn table(&self) -> &Table<E> {
        &self.table
    }

    /// Whether `element` belongs to the declared element set.
    pub fn contains(&self, element: &E) -> bool {
        self.table.contains_key(element)
    }

    /// Apply the group operation: `a * b`.
    ///
    /// # Errors
    ///
    /// [`TableError::NotAnElement`] if either argument is outside the
    /// element set.
    pub fn op(&self, a: &E, b: &E) -> Result<&E, TableError<E>> {
        if !self.contains(a) {
            return Err(TableError::NotAnElement(a.clone()));
        }
        if !self.contains(b) {
            return Err(TableError::NotAnElement(b.clone()));
        }
        Ok(self.cell(a, b))
    }

    /// Table lookup for a pair of declared elements.
    ///
    /// Totality over the declared set is established in `new_unchecked`, so
    /// indexing cannot miss for in-set arguments.
    fn cell(&self, a: &E, b: &E) -> &E {
        &self.table[a][b]
    }

    /// The identity element, found by a fresh left-identity scan.
    ///
    /// For groups (and rings and fields) a left identity is automatically
    /// two-sided, so scanning rows suffices. Post-validation the scan always
    /// finds exactly one element.
    ///
    /// # Errors
    ///
    /// On an unvalidated (restriction) table: [`AxiomFailure::NoIdentity`] if
    /// no row fixes every element, [`Ambiguity::MultipleIdentities`] if more
    /// than one does.
    pub fn identity(&self) -> Result<E, TableError<E>> {
        let mut found: Vec<E> = Vec::new();
        for candidate in &self.elements {
            if self.elements.iter().all(|x| self.cell(candidate, x) == x) {
                found.push(candidate.clone());
            }
        }
        if found.len() > 1 {
            return Err(TableError::AmbiguousStructure(Ambiguity::MultipleIdentities(
                found,
            )));
        }
        found
            .pop()
            .ok_or(TableError::NotAGroup(AxiomFailure::NoIdentity))
    }

    /// The two-sided inverse of `element`, if it has exactly one.
    ///
    /// `Ok(None)` means no inverse exists — reachable only through the
    /// diagnostic path on unvalidated tables, since validation requires every
    /// element to be invertible.
    ///
    /// # Errors
    ///
    /// - [`TableError::NotAnElement`] if `element` is not declared,
    /// - [`Ambiguity::MultipleInverses`] if several candidates satisfy
    ///   `element * y = y * element = e`; the error carries them all,
    /// - identity errors from the underlying identity scan.
    pub fn inverse(&self, element: &E) -> Result<Option<E>, TableError<E>> {
        if !self.contains(element) {
            return Err(TableError::NotAnElement(element.clone()));
        }
        let identity = self.identity()?;
        self.inverse_against(element, &identity)
    }

    /// Inverse scan with the identity already in hand.
    fn inverse_against(&self, element: &E, identity: &E) -> Result<Option<E>, TableError<E>> {
        let mut candidates: Vec<E> = Vec::new();
        for y in &self.elements {
            if self.cell(element, y) == identity && self.cell(y, element) == identity {
                candidates.push(y.clone());
            }
        }
        if candidates.len() > 1 {
            return Err(TableError::AmbiguousStructure(Ambiguity::MultipleInverses {
                element: element.clone(),
                inverses: candidates,
            }));
        }
        Ok(candidates.pop())
    }

    /// Whether the operation commutes: `a * b = b * a` for every pair.
    pub fn is_abelian(&self) -> bool {
        for (i, a) in self.elements.iter().enumerate() {
            for b in &self.elements[i + 1..] {
                if self.cell(a, b) != self.cell(b, a) {
                    return false;
                }
            }
        }
        true
    }

    /// The order of `element`: the least positive m with `element^m = e`.
    ///
    /// Scans `order` self-compositions. By Lagrange's theorem the order of an
    /// element divides the group order, so failing to reach the identity
    /// within `order` steps proves no finite order exists; `Ok(None)` encodes
    /// that outcome and is unreachable for a validated group.
    ///
    /// # Errors
    ///
    /// [`TableError::NotAnElement`] if `element` is not declared.
    pub fn element_order(&self, element: &E) -> Result<Option<usize>, TableError<E>> {
        if !self.contains(element) {
            return Err(TableError::NotAnElement(element.clone()));
        }
        let identity = self.identity()?;
        let mut power = element.clone();
        for m in 1..=self.order() {
            if power == identity {
                return Ok(Some(m));
            }
            power = self.cell(&power, element).clone();
        }
        Ok(None)
    }

    /// All elements of the given order, as a set.
    pub fn elements_of_order(&self, order: usize) -> Result<BTreeSet<E>, TableError<E>> {
        let mut found = BTreeSet::new();
        for element in &self.elements {
            if self.element_order(element)? == Some(order) {
                found.insert(element.clone());
            }
        }
        Ok(found)
    }

    /// Whether some single element generates the whole group.
    ///
    /// Groups of prime order are always cyclic (any non-identity element
    /// generates), which short-circuits the scan.
    pub fn is_cyclic(&self) -> Result<bool, TableError<E>> {
        let n = self.order();
        if n > 1 && is_prime(n as u64) {
            return Ok(true);
        }
        for element in &self.elements {
            if self.element_order(element)? == Some(n) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether `subset` forms a subgroup.
    ///
    /// Restricts the table to `subset` and runs the full axiom suite on the
    /// restriction — a subgroup is exactly a subset whose restricted table is
    /// itself a group. The empty subset is not a subgroup (no identity).
    ///
    /// # Errors
    ///
    /// [`TableError::MissingElements`] if `subset` names elements outside
    /// this group. Axiom failures of the restriction are the answer `false`,
    /// not errors.
    pub fn is_subgroup(&self, subset: &[E]) -> Result<bool, TableError<E>> {
        let restricted = restrict(subset, &self.table)?;
        let candidate = Self::new_unchecked(restricted)?;
        match candidate.validate() {
            Ok(()) => Ok(true),
            Err(TableError::NotAGroup(_)) | Err(TableError::AmbiguousStructure(_)) => Ok(false),
            Err(other) => Err(other),
        }
    }

    /// Run the four axiom checks against a shape-checked table.
    ///
    /// Closure must come first: the associativity scan indexes the table by
    /// produced values, which is only safe once every produced value is known
    /// to be a declared element.
    fn validate(&self) -> Result<(), TableError<E>> {
        self.check_closure()?;
        let identity = self.identity()?;
        for element in &self.elements {
            if self.inverse_against(element, &identity)?.is_none() {
                return Err(TableError::NotAGroup(AxiomFailure::NoInverse(
                    element.clone(),
                )));
            }
        }
        self.check_associativity()
    }

    fn check_closure(&self) -> Result<(), TableError<E>> {
        for (row, cells) in &self.table {
            for (col, value) in cells {
                if !self.contains(value) {
                    return Err(TableError::NotAGroup(AxiomFailure::NotClosed {
                        row: row.clone(),
                        col: col.clone(),
                        value: value.clone(),
                    }));
                }
            }
        }
        Ok(())
    }

    fn check_associativity(&self) -> Result<(), TableError<E>> {
        for a in &self.elements {
            for b in &self.elements {
                let ab = self.cell(a, b);
                for c in &self.elements {
                    let bc = self.cell(b, c);
                    if self.cell(ab, c) != self.cell(a, bc) {
                        return Err(TableError::NotAGroup(AxiomFailure::NotAssociative {
                            a: a.clone(),
                            b: b.clone(),
                            c: c.clone(),
                        }));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<E> serde::Serialize for CayleyTable<E>
where
    E: Element + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.table.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for CayleyTable<E>
where
    E: Element + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let table = Table::<E>::deserialize(deserializer)?;
        CayleyTable::new(table).map_err(serde::de::Error::custom)
    }
}
