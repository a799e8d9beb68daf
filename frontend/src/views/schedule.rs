use std::rc::Rc;

use shared::table::specs;
use shared::{render, ListFuture, NoSummary, ScheduleRecord};
use yew::prelude::*;

use crate::components::remote_list_view::RemoteListView;
use crate::hooks::use_remote_list::{use_remote_list, FetchFn};
use crate::views::use_app_context;

#[function_component(Schedule)]
pub fn schedule() -> Html {
    let context = use_app_context();

    let fetch: FetchFn<ScheduleRecord, NoSummary> = {
        let api = context.api.clone();
        Rc::new(move || -> ListFuture<ScheduleRecord, NoSummary> {
            let api = api.clone();
            Box::pin(async move { api.get_student_classes().await })
        })
    };
    let list = use_remote_list("schedule", fetch);

    html! {
        <RemoteListView
            view={render(&specs::schedule(), &list.state, &context.formatter)}
            on_retry={list.retry}
        />
    }
}
