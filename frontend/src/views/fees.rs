use std::rc::Rc;

use shared::table::specs;
use shared::{render, FeeQuery, FeeRecord, FeeSummary, ListFuture, SortOrder};
use yew::prelude::*;

use crate::components::remote_list_view::RemoteListView;
use crate::hooks::use_remote_list::{use_remote_list, FetchFn};
use crate::views::use_app_context;

#[derive(Properties, PartialEq)]
pub struct FeesProps {
    /// Due-date order, newest first unless told otherwise
    #[prop_or_default]
    pub sort: SortOrder,
}

#[function_component(Fees)]
pub fn fees(props: &FeesProps) -> Html {
    let context = use_app_context();

    let fetch: FetchFn<FeeRecord, FeeSummary> = {
        let api = context.api.clone();
        let query = FeeQuery { sort: props.sort };
        Rc::new(move || -> ListFuture<FeeRecord, FeeSummary> {
            let api = api.clone();
            Box::pin(async move { api.get_student_fees(query).await })
        })
    };
    let list = use_remote_list("fees", fetch);

    html! {
        <RemoteListView
            view={render(&specs::fees(), &list.state, &context.formatter)}
            on_retry={list.retry}
        />
    }
}
