// Interned cell coordinates. One registry lives for the whole garden session
// and never evicts; the coordinate space of a single garden is small.
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq, Hash)]
struct Coord {
    row: i32,
    column: i32,
}

/// Canonical handle for one (row, column) position.
///
/// Only [`CoordinateRegistry::identity_for`] creates these, so every handle for
/// the same coordinate shares one allocation. Equality and hashing are still
/// structural, which keeps map lookups correct even across registries.
#[derive(Clone, Debug)]
pub struct CellIdentity(Rc<Coord>);

impl CellIdentity {
    pub fn row(&self) -> i32 {
        self.0.row
    }

    pub fn column(&self) -> i32 {
        self.0.column
    }

    /// Display/debug key in the form `"row,column"`.
    pub fn key(&self) -> String {
        format!("{},{}", self.0.row, self.0.column)
    }

    /// True when both handles point at the same interned instance.
    pub fn same_instance(&self, other: &CellIdentity) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for CellIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other) || self.0 == other.0
    }
}

impl Eq for CellIdentity {}

impl Hash for CellIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for CellIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.row, self.0.column)
    }
}

/// Append-only cache of [`CellIdentity`] values.
///
/// Interior mutability through `RefCell`: the app is single-threaded and the
/// registry is shared by `Rc` between the generator, renderer and components.
#[derive(Debug, Default)]
pub struct CoordinateRegistry {
    known: RefCell<HashMap<(i32, i32), CellIdentity>>,
}

impl CoordinateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity_for(&self, row: i32, column: i32) -> CellIdentity {
        self.known
            .borrow_mut()
            .entry((row, column))
            .or_insert_with(|| CellIdentity(Rc::new(Coord { row, column })))
            .clone()
    }

    /// Number of distinct coordinates interned so far.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.known.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.known.borrow().is_empty()
    }
}
