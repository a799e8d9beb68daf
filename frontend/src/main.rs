use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod views;

use services::api::ApiClient;
use services::config::AppConfig;
use services::logging::Logger;
use services::session::load_current_user;
use shared::{CurrentUser, Formatter, SortOrder};
use views::attendance::Attendance;
use views::fees::Fees;
use views::salary_history::SalaryHistory;
use views::schedule::Schedule;
use views::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Salary,
    Attendance,
    Fees,
    Schedule,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Salary, Tab::Attendance, Tab::Fees, Tab::Schedule];

    fn label(self) -> &'static str {
        match self {
            Tab::Salary => "Salary",
            Tab::Attendance => "Attendance",
            Tab::Fees => "Fees",
            Tab::Schedule => "Schedule",
        }
    }
}

/// View dependencies plus the signed-in user, resolved once at startup.
fn build_context() -> (AppContext, Option<CurrentUser>) {
    let config = AppConfig::from_env();

    let current_user = match load_current_user(&config.session_storage_key) {
        Ok(user) => user,
        Err(e) => {
            Logger::warn_with_component("session", &format!("{:#}", e));
            None
        }
    };

    let context = AppContext {
        api: ApiClient::with_base_url(config.api_base_url.clone()),
        formatter: Formatter::new(config.display.clone()),
    };
    (context, current_user)
}

#[function_component(App)]
fn app() -> Html {
    let startup = use_memo((), |_| build_context());
    let (context, current_user) = &*startup;
    let active_tab = use_state(|| Tab::Salary);

    let student_id: Option<AttrValue> = current_user
        .as_ref()
        .map(|user| AttrValue::from(user.profile_id.clone()));

    let tabs = Tab::ALL.iter().map(|&tab| {
        let onclick = {
            let active_tab = active_tab.clone();
            Callback::from(move |_: MouseEvent| active_tab.set(tab))
        };
        let class = if *active_tab == tab { "tab active" } else { "tab" };
        html! {
            <button {class} {onclick}>{tab.label()}</button>
        }
    });

    let body = match *active_tab {
        Tab::Salary => html! { <SalaryHistory /> },
        Tab::Attendance => html! { <Attendance student_id={student_id} /> },
        Tab::Fees => html! { <Fees sort={SortOrder::Desc} /> },
        Tab::Schedule => html! { <Schedule /> },
    };

    html! {
        <ContextProvider<AppContext> context={context.clone()}>
            <div class="app">
                <header class="header">
                    <h1>{"Tuition Portal"}</h1>
                    <nav class="tabs">{for tabs}</nav>
                </header>
                <main class="content">{body}</main>
            </div>
        </ContextProvider<AppContext>>
    }
}

fn main() {
    if let Err(e) = Logger::init(&AppConfig::from_env()) {
        gloo::console::error!(format!("{:#}", e));
    }
    yew::Renderer::<App>::new().render();
}
