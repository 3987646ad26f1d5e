use super::app::RegistryContext;
use super::cell_view::CellView;
use crate::state::{CellIdentity, CellSlot, GardenState, render_garden};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GardenViewProps {
    pub garden_state: UseReducerHandle<GardenState>,
    pub on_cell_activated: Callback<CellIdentity>,
}

#[function_component(GardenView)]
pub fn garden_view(props: &GardenViewProps) -> Html {
    let Some(RegistryContext(registry)) = use_context::<RegistryContext>() else {
        log::error!("GardenView rendered without a coordinate registry");
        return html! {};
    };
    let table = render_garden(&props.garden_state.garden, &registry);
    let rows = table.rows.into_iter().map(|row| {
        let tds = row.cells.into_iter().map(|rendered| {
            let key = rendered.cell.key();
            match (rendered.trigger(), &rendered.slot) {
                (Some(cell), CellSlot::Soil(contents)) => html! {
                    <td key={key}>
                        <CellView
                            cell={cell.clone()}
                            contents={contents.clone()}
                            on_activate={props.on_cell_activated.clone()} />
                    </td>
                },
                _ => html! { <td key={key}>{"..."}</td> },
            }
        });
        html! { <tr key={row.row}>{ for tds }</tr> }
    });

    html! {<div class="garden">
        <table><tbody>{ for rows }</tbody></table>
    </div>}
}
