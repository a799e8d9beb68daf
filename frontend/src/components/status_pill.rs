use shared::StatusTone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusPillProps {
    pub label: AttrValue,
    pub tone: StatusTone,
}

#[function_component(StatusPill)]
pub fn status_pill(props: &StatusPillProps) -> Html {
    html! {
        <span class={props.tone.css_class()}>{&props.label}</span>
    }
}
