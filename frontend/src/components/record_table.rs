use shared::{Cell, RenderedRow};
use yew::prelude::*;

use crate::components::status_pill::StatusPill;

#[derive(Properties, PartialEq)]
pub struct RecordTableProps {
    pub header: Vec<&'static str>,
    pub rows: Vec<RenderedRow>,
}

#[function_component(RecordTable)]
pub fn record_table(props: &RecordTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="records-table">
                <thead>
                    <tr>
                        {for props.header.iter().map(|title| html! { <th>{*title}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for props.rows.iter().map(|row| html! {
                        <tr key={row.key.clone()}>
                            {for row.cells.iter().map(render_cell)}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_cell(cell: &Cell) -> Html {
    match cell {
        Cell::Text(text) => html! { <td>{text}</td> },
        Cell::Pill { label, tone } => html! {
            <td><StatusPill label={label.clone()} tone={*tone} /></td>
        },
    }
}
