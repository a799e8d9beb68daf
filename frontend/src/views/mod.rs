//! The four list views. Each one only supplies its fetch and its table
//! layout; loading, failure and rendering are shared.

pub mod attendance;
pub mod fees;
pub mod salary_history;
pub mod schedule;

use shared::Formatter;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Dependencies the app shell hands to every view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppContext {
    pub api: ApiClient,
    pub formatter: Formatter,
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_default()
}
