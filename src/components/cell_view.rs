use super::plant_view::PlantView;
use crate::model::CellContents;
use crate::state::CellIdentity;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CellViewProps {
    pub cell: CellIdentity,
    pub contents: Rc<CellContents>,
    pub on_activate: Callback<CellIdentity>,
}

#[function_component(CellView)]
pub fn cell_view(props: &CellViewProps) -> Html {
    let activate_cb = {
        let cb = props.on_activate.clone();
        let cell = props.cell.clone();
        Callback::from(move |_: MouseEvent| cb.emit(cell.clone()))
    };
    let title = format!("{} moisture {}", props.cell.key(), props.contents.moisture);
    html! {<div class="cell" title={title} style="display:flex; align-items:center; gap:6px;">
        <div class="cell-contents">
            { match &props.contents.plant {
                Some(plant) => html!{ <PlantView plant={plant.clone()} /> },
                None => html!{ "empty" },
            } }
        </div>
        <button onclick={activate_cb}>{"@"}</button>
    </div>}
}
