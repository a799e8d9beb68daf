use std::rc::Rc;

use shared::{load_remote_list, ActivationSlot, ListFuture, RemoteList};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Builds the fetch for one activation. Called exactly once per activation.
pub type FetchFn<R, S> = Rc<dyn Fn() -> ListFuture<R, S>>;

pub struct UseRemoteListResult<R, S> {
    pub state: RemoteList<R, S>,
    /// Start a fresh activation after a failure
    pub retry: Callback<()>,
}

/// Fetch a list once when the calling component mounts.
///
/// Each run of the effect renews the view's [`ActivationSlot`], which retires
/// the previous activation before the next fetch starts. Unmount retires the
/// slot, so a fetch that settles late never touches state it no longer owns.
#[hook]
pub fn use_remote_list<R, S>(view: &'static str, fetch: FetchFn<R, S>) -> UseRemoteListResult<R, S>
where
    R: Clone + 'static,
    S: Clone + 'static,
{
    let state = use_state(RemoteList::<R, S>::default);
    let attempt = use_state(|| 0u32);
    let slot = use_state(ActivationSlot::new);

    {
        let state = state.clone();
        let slot = (*slot).clone();
        use_effect_with(*attempt, move |attempt| {
            let activation = slot.renew();
            if *attempt > 0 {
                Logger::info_with_component(view, &format!("Retrying (attempt {})", attempt + 1));
                state.set(RemoteList::Loading);
            }

            let future = fetch();
            spawn_local(async move {
                load_remote_list(view, &activation, future, move |settled| state.set(settled))
                    .await;
            });

            move || {
                slot.retire();
                Logger::debug_with_component(view, "Deactivated");
            }
        });
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    UseRemoteListResult {
        state: (*state).clone(),
        retry,
    }
}
