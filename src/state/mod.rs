pub mod generator;
pub mod interaction;
pub mod registry;
pub mod render;

pub use generator::generate_garden;
pub use interaction::{GardenAction, GardenState};
pub use registry::{CellIdentity, CoordinateRegistry};
pub use render::{CellSlot, render_garden};
