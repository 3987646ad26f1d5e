use super::garden_view::GardenView;
use crate::config::GardenConfig;
use crate::state::{CellIdentity, CoordinateRegistry, GardenAction, GardenState, generate_garden};
use std::rc::Rc;
use yew::prelude::*;

// One registry per garden session, handed to components through context.
#[derive(Clone)]
pub struct RegistryContext(pub Rc<CoordinateRegistry>);

impl PartialEq for RegistryContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<GardenConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let registry = use_memo((), |_| CoordinateRegistry::new());
    let garden_state = {
        let config = props.config.clone();
        let registry = registry.clone();
        use_reducer(move || {
            let garden = generate_garden(&config, &registry, js_sys::Math::random);
            GardenState::new(garden, config.planted_species.clone())
        })
    };

    let on_cell_activated = {
        let garden_state = garden_state.clone();
        Callback::from(move |cell: CellIdentity| {
            garden_state.dispatch(GardenAction::CellActivated(cell))
        })
    };

    let registry_ctx = RegistryContext(registry);

    html! { <ContextProvider<RegistryContext> context={registry_ctx}>
        <h1>{"My Garden"}</h1>
        <GardenView garden_state={garden_state} on_cell_activated={on_cell_activated} />
    </ContextProvider<RegistryContext>> }
}
