use std::rc::Rc;

use log::LevelFilter;

mod components;
mod config;
mod model;
mod state;
mod util;

use components::{App, AppProps};

fn main() {
    util::init_logging(LevelFilter::Info);
    let config = config::load_config();
    log::set_max_level(config.log_level);
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
