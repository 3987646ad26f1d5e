use crate::model::PlantRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlantViewProps {
    pub plant: PlantRecord,
}

#[function_component(PlantView)]
pub fn plant_view(props: &PlantViewProps) -> Html {
    html! { <div class="plant">{ format!("{} [lvl.\u{a0}{}]", props.plant.species, props.plant.level) }</div> }
}
