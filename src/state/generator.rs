// Random seed data for a fresh garden session.
use crate::config::GardenConfig;
use crate::model::{CellContents, GridModel, PlantRecord};
use crate::state::CoordinateRegistry;

/// Builds the initial garden over `rows x columns`.
///
/// `roll` yields uniform values in `[0, 1)`. Positions are visited row-major;
/// each draws one presence roll and, when included, one plant roll. The
/// result may be sparse, disconnected, or empty.
pub fn generate_garden(
    config: &GardenConfig,
    registry: &CoordinateRegistry,
    mut roll: impl FnMut() -> f64,
) -> GridModel {
    let (Ok(rows), Ok(columns)) = (i32::try_from(config.rows), i32::try_from(config.columns))
    else {
        log::warn!(
            "garden dimensions {}x{} exceed the coordinate range, generating nothing",
            config.rows,
            config.columns
        );
        return GridModel::default();
    };
    let mut cells = Vec::new();
    for i in 0..rows {
        for j in 0..columns {
            if roll() >= config.presence_probability {
                continue;
            }
            let contents = if roll() < config.plant_probability {
                CellContents::with_plant(PlantRecord::sprout(config.seed_species.as_str()))
            } else {
                CellContents::default()
            };
            cells.push((registry.identity_for(i, j), contents));
        }
    }
    let garden: GridModel = cells.into_iter().collect();
    if garden.is_empty() {
        log::warn!("generated garden has no cells");
    }
    log::info!(
        "generated garden: {} of {} cells present, {} planted",
        garden.len(),
        u64::from(config.rows) * u64::from(config.columns),
        garden.planted_count()
    );
    garden
}
