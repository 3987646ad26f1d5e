pub mod app;
pub mod cell_view;
pub mod garden_view;
pub mod plant_view;

pub use app::{App, AppProps};
