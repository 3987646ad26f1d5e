// The single state transition: activating a cell grows its plant or plants one.
use std::rc::Rc;

use yew::Reducible;

use crate::model::{CellContents, GridModel, PlantRecord};
use crate::state::CellIdentity;

/// Applies grow-or-plant to `cell`.
///
/// Returns `garden` itself (same `Rc`) when the cell does not exist, and a new
/// snapshot otherwise.
pub fn handle_cell_activated(
    cell: &CellIdentity,
    garden: &Rc<GridModel>,
    planted_species: &str,
) -> Rc<GridModel> {
    let Some(contents) = garden.get(cell) else {
        log::trace!("activation on absent cell {} ignored", cell);
        return garden.clone();
    };
    let plant = match &contents.plant {
        Some(plant) => {
            let next = plant.grown();
            log::debug!("{} {} grew to level {}", cell, next.species, next.level);
            next
        }
        None => {
            log::debug!("{} planted with {}", cell, planted_species);
            PlantRecord::sprout(planted_species)
        }
    };
    let updated = CellContents {
        plant: Some(plant),
        ..(**contents).clone()
    };
    Rc::new(garden.with_updated_contents(cell, updated))
}

#[derive(Clone, Debug, PartialEq)]
pub struct GardenState {
    pub garden: Rc<GridModel>,
    pub planted_species: String,
    /// Bumped on every committed change.
    pub version: u64,
}

impl GardenState {
    pub fn new(garden: GridModel, planted_species: impl Into<String>) -> Self {
        Self {
            garden: Rc::new(garden),
            planted_species: planted_species.into(),
            version: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub enum GardenAction {
    CellActivated(CellIdentity),
}

impl Reducible for GardenState {
    type Action = GardenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GardenAction::CellActivated(cell) => {
                let garden = handle_cell_activated(&cell, &self.garden, &self.planted_species);
                if Rc::ptr_eq(&garden, &self.garden) {
                    return self;
                }
                Rc::new(GardenState {
                    garden,
                    planted_species: self.planted_species.clone(),
                    version: self.version.wrapping_add(1),
                })
            }
        }
    }
}
