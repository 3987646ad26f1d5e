//! Core data model for the garden.
//! A garden is a sparse map from interned cell identity to cell contents; a
//! cell missing from the map does not exist, which is different from a cell
//! that exists with bare soil.

use std::collections::HashMap;
use std::rc::Rc;

use crate::state::CellIdentity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlantRecord {
    /// Short display symbol, usually a single emoji.
    pub species: String,
    /// Growth level, starts at 1.
    pub level: u32,
}

impl PlantRecord {
    pub fn sprout(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            level: 1,
        }
    }

    /// Same species, one level higher.
    pub fn grown(&self) -> Self {
        Self {
            species: self.species.clone(),
            level: self.level.saturating_add(1),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellContents {
    pub plant: Option<PlantRecord>,
    /// Soil moisture. Seeded at 0 and not yet driven by any interaction.
    pub moisture: u32,
}

impl CellContents {
    pub fn with_plant(plant: PlantRecord) -> Self {
        Self {
            plant: Some(plant),
            ..Default::default()
        }
    }
}

/// Snapshot of the whole garden.
///
/// Treated as an immutable value: updates go through
/// [`GridModel::with_updated_contents`], which builds a new snapshot that
/// shares every untouched entry with the old one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridModel {
    cells: HashMap<CellIdentity, Rc<CellContents>>,
}

impl GridModel {
    pub fn get(&self, cell: &CellIdentity) -> Option<&Rc<CellContents>> {
        self.cells.get(cell)
    }

    /// New snapshot where `cell` maps to `contents`. Other entries are copied by
    /// reference; an absent `cell` is inserted. `self` is left untouched.
    pub fn with_updated_contents(&self, cell: &CellIdentity, contents: CellContents) -> Self {
        let mut cells = self.cells.clone();
        cells.insert(cell.clone(), Rc::new(contents));
        Self { cells }
    }

    pub fn cells(&self) -> impl Iterator<Item = (&CellIdentity, &Rc<CellContents>)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn planted_count(&self) -> usize {
        self.cells.values().filter(|c| c.plant.is_some()).count()
    }
}

impl FromIterator<(CellIdentity, CellContents)> for GridModel {
    fn from_iter<I: IntoIterator<Item = (CellIdentity, CellContents)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(cell, contents)| (cell, Rc::new(contents)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CoordinateRegistry;

    #[test]
    fn absent_and_empty_soil_are_distinct() {
        let registry = CoordinateRegistry::new();
        let present = registry.identity_for(0, 0);
        let missing = registry.identity_for(0, 1);
        let garden: GridModel = [(present.clone(), CellContents::default())]
            .into_iter()
            .collect();
        assert_eq!(garden.get(&present).map(|c| c.plant.clone()), Some(None));
        assert!(garden.get(&missing).is_none());
            }

    #[test]
    fn update_leaves_original_and_shares_untouched_entries() {
        let registry = CoordinateRegistry::new();
        let a = registry.identity_for(0, 0);
        let b = registry.identity_for(0, 1);
        let before: GridModel = [
            (a.clone(), CellContents::default()),
            (b.clone(), CellContents::with_plant(PlantRecord::sprout("🌿"))),
        ]
        .into_iter()
        .collect();

        let after =
            before.with_updated_contents(&a, CellContents::with_plant(PlantRecord::sprout("🌵")));

        assert_eq!(before.get(&a).and_then(|c| c.plant.clone()), None);
        assert_eq!(
            after.get(&a).and_then(|c| c.plant.clone()),
            Some(PlantRecord::sprout("🌵"))
        );
        let (Some(old_b), Some(new_b)) = (before.get(&b), after.get(&b)) else {
            panic!("untouched cell went missing");
        };
        assert!(Rc::ptr_eq(old_b, new_b));
    }

    #[test]
    fn update_of_absent_cell_inserts_it() {
        let registry = CoordinateRegistry::new();
        let cell = registry.identity_for(9, -3);
        let garden = GridModel::default().with_updated_contents(&cell, CellContents::default());
        assert_eq!(garden.len(), 1);
        assert!(garden.get(&cell).is_some());
    }

    #[test]
    fn grown_keeps_species() {
        let plant = PlantRecord { species: "🌵".into(), level: 4 };
        let next = plant.grown();
        assert_eq!(next.species, "🌵");
        assert_eq!(next.level, 5);
        assert_eq!(PlantRecord { species: "x".into(), level: u32::MAX }.grown().level, u32::MAX);
    }

    #[test]
    fn planted_count_ignores_bare_soil() {
        let registry = CoordinateRegistry::new();
        let garden: GridModel = [
            (registry.identity_for(0, 0), CellContents::default()),
            (registry.identity_for(0, 1), CellContents::with_plant(PlantRecord::sprout("🌿"))),
        ]
        .into_iter()
        .collect();
        assert_eq!(garden.planted_count(), 1);
        assert_eq!(garden.len(), 2);
    }
}
