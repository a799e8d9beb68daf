use std::rc::Rc;

use shared::table::specs;
use shared::{render, AttendanceRecord, FetchError, ListFuture, NoSummary};
use yew::prelude::*;

use crate::components::remote_list_view::RemoteListView;
use crate::hooks::use_remote_list::{use_remote_list, FetchFn};
use crate::views::use_app_context;

#[derive(Properties, PartialEq)]
pub struct AttendanceProps {
    /// Profile id of the student whose attendance is shown
    #[prop_or_default]
    pub student_id: Option<AttrValue>,
}

#[function_component(Attendance)]
pub fn attendance(props: &AttendanceProps) -> Html {
    let context = use_app_context();

    let fetch: FetchFn<AttendanceRecord, NoSummary> = {
        let api = context.api.clone();
        let student_id = props.student_id.clone();
        Rc::new(move || -> ListFuture<AttendanceRecord, NoSummary> {
            let api = api.clone();
            let student_id = student_id.clone();
            Box::pin(async move {
                match student_id {
                    Some(id) => api.get_student_attendance(&id).await,
                    None => Err(FetchError::MissingIdentity),
                }
            })
        })
    };
    let list = use_remote_list("attendance", fetch);

    html! {
        <RemoteListView
            view={render(&specs::attendance(), &list.state, &context.formatter)}
            on_retry={list.retry}
        />
    }
}
