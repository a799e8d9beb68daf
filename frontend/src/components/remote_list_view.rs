use shared::{RenderedView, ViewStatus};
use yew::prelude::*;

use crate::components::record_table::RecordTable;
use crate::components::summary_cards::SummaryCards;

#[derive(Properties, PartialEq)]
pub struct RemoteListViewProps {
    pub view: RenderedView,
    pub on_retry: Callback<()>,
}

/// Section shell shared by every list: loading notice, failure with a retry
/// button, or summary cards plus the table.
#[function_component(RemoteListView)]
pub fn remote_list_view(props: &RemoteListViewProps) -> Html {
    let view = &props.view;

    let body = match &view.status {
        ViewStatus::Loading => html! {
            <div class="loading">{format!("Loading {}...", view.title.to_lowercase())}</div>
        },
        ViewStatus::Failed { message } => {
            let on_retry = props.on_retry.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
            html! {
                <div class="form-message error">
                    <span>{message}</span>
                    <button class="btn btn-secondary" {onclick}>
                        {"Try again"}
                    </button>
                </div>
            }
        }
        ViewStatus::Ready | ViewStatus::Empty => html! {
            <>
                <SummaryCards cards={view.summary_cards.clone()} />
                <RecordTable header={view.header.clone()} rows={view.rows.clone()} />
                {if view.status == ViewStatus::Empty {
                    html! { <div class="empty-state">{view.empty_message}</div> }
                } else {
                    html! {}
                }}
            </>
        },
    };

    html! {
        <section class="list-section">
            <h2>{view.title}</h2>
            {body}
        </section>
    }
}
