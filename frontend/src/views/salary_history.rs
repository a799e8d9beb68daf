use std::rc::Rc;

use shared::table::specs;
use shared::{render, ListFuture, SalaryRecord, SalarySummary};
use yew::prelude::*;

use crate::components::remote_list_view::RemoteListView;
use crate::hooks::use_remote_list::{use_remote_list, FetchFn};
use crate::views::use_app_context;

#[function_component(SalaryHistory)]
pub fn salary_history() -> Html {
    let context = use_app_context();

    let fetch: FetchFn<SalaryRecord, SalarySummary> = {
        let api = context.api.clone();
        Rc::new(move || -> ListFuture<SalaryRecord, SalarySummary> {
            let api = api.clone();
            Box::pin(async move { api.get_tutor_salaries().await })
        })
    };
    let list = use_remote_list("salary-history", fetch);

    html! {
        <RemoteListView
            view={render(&specs::salary_history(), &list.state, &context.formatter)}
            on_retry={list.retry}
        />
    }
}
