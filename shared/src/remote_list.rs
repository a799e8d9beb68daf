//! View-model for a list fetched once when a view is activated.
//!
//! A view starts [`RemoteList::Loading`], runs its fetch exactly once through
//! [`load_remote_list`], and settles into either `Loaded` or `Failed`. The
//! settled value replaces the whole state in one step, so records, summary and
//! the loading flag can never be observed out of sync.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use log::{debug, error, warn};

use crate::envelope::ListPage;
use crate::error::{FetchError, FetchFailure};

/// Boxed list fetch, as stored by views that keep their fetch around for retries.
pub type ListFuture<R, S> = Pin<Box<dyn Future<Output = Result<ListPage<R, S>, FetchError>>>>;

/// State of one remote list.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteList<R, S> {
    Loading,
    Loaded(ListPage<R, S>),
    Failed(FetchFailure),
}

impl<R, S> Default for RemoteList<R, S> {
    fn default() -> Self {
        RemoteList::Loading
    }
}

impl<R, S> RemoteList<R, S> {
    pub fn from_result(result: Result<ListPage<R, S>, FetchError>) -> Self {
        match result {
            Ok(page) => RemoteList::Loaded(page),
            Err(e) => RemoteList::Failed(FetchFailure::from(&e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteList::Loading)
    }

    /// Records in server order; empty unless loaded.
    pub fn records(&self) -> &[R] {
        match self {
            RemoteList::Loaded(page) => &page.records,
            _ => &[],
        }
    }

    /// Present only when loaded and the response carried one.
    pub fn summary(&self) -> Option<&S> {
        match self {
            RemoteList::Loaded(page) => page.summary.as_ref(),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            RemoteList::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Liveness of one view activation. Clones share the flag; once deactivated
/// an activation stays dead.
#[derive(Debug, Clone)]
pub struct Activation {
    live: Rc<Cell<bool>>,
}

impl Activation {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.live.get()
    }

    pub fn deactivate(&self) {
        self.live.set(false);
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}

/// The activation a view currently owns. Clones share the slot.
///
/// [`renew`](Self::renew) retires the previous activation before handing out
/// the next one, so a retried view never accepts its earlier fetch.
#[derive(Debug, Clone, Default)]
pub struct ActivationSlot {
    current: Rc<RefCell<Option<Activation>>>,
}

impl ActivationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renew(&self) -> Activation {
        let next = Activation::new();
        if let Some(previous) = self.current.replace(Some(next.clone())) {
            previous.deactivate();
        }
        next
    }

    /// Deactivate the current activation, if any. Used on unmount.
    pub fn retire(&self) {
        if let Some(previous) = self.current.borrow_mut().take() {
            previous.deactivate();
        }
    }
}

/// What happened to a settled fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The result was handed to the view
    Applied,
    /// The view was gone by the time the fetch settled
    Discarded,
}

/// Await `fetch` and hand the settled state to `apply`, unless `activation`
/// has been deactivated in the meantime.
///
/// Failures are logged here and nowhere else: logical failures at `warn`,
/// transport and decode failures at `error`. Views only see the
/// user-facing [`FetchFailure`].
pub async fn load_remote_list<R, S, Fut, F>(
    view: &str,
    activation: &Activation,
    fetch: Fut,
    apply: F,
) -> Settled
where
    Fut: Future<Output = Result<ListPage<R, S>, FetchError>>,
    F: FnOnce(RemoteList<R, S>),
{
    let result = fetch.await;

    match &result {
        Ok(page) => debug!(
            "[{}] loaded {} records (summary: {})",
            view,
            page.records.len(),
            page.summary.is_some()
        ),
        Err(e) if e.is_logical() => warn!("[{}] no data: {}", view, e),
        Err(e) => error!("[{}] fetch failed: {}", view, e),
    }

    if !activation.is_active() {
        debug!("[{}] view deactivated before fetch settled, dropping result", view);
        return Settled::Discarded;
    }

    apply(RemoteList::from_result(result));
    Settled::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use std::cell::RefCell;

    type State = RemoteList<u32, String>;

    fn page(records: Vec<u32>, summary: Option<&str>) -> ListPage<u32, String> {
        ListPage {
            records,
            summary: summary.map(str::to_string),
        }
    }

    #[test]
    fn test_default_is_loading() {
        let state = State::default();
        assert!(state.is_loading());
        assert!(state.records().is_empty());
        assert!(state.summary().is_none());
        assert!(state.failure().is_none());
    }

    #[test]
    fn test_accessors_when_loaded() {
        let state = State::from_result(Ok(page(vec![3, 1, 2], Some("totals"))));
        assert!(!state.is_loading());
        assert_eq!(state.records(), &[3, 1, 2]);
        assert_eq!(state.summary().map(String::as_str), Some("totals"));
    }

    #[test]
    fn test_accessors_when_failed() {
        let state = State::from_result(Err(FetchError::Decode("bad".to_string())));
        assert!(!state.is_loading());
        assert!(state.records().is_empty());
        assert!(state.summary().is_none());
        assert_eq!(state.failure().map(|f| f.kind), Some(FailureKind::Unavailable));
    }

    #[test]
    fn test_activation_clones_share_liveness() {
        let activation = Activation::new();
        let clone = activation.clone();
        assert!(clone.is_active());
        activation.deactivate();
        assert!(!clone.is_active());
    }

    #[tokio::test]
    async fn test_applies_loaded_state() {
        let activation = Activation::new();
        let slot = RefCell::new(State::Loading);

        let settled = load_remote_list(
            "test",
            &activation,
            async { Ok::<_, FetchError>(page(vec![1], None)) },
            |s| *slot.borrow_mut() = s,
        )
        .await;

        assert_eq!(settled, Settled::Applied);
        assert_eq!(slot.borrow().records(), &[1]);
    }

    #[tokio::test]
    async fn test_applies_failed_state_for_rejection() {
        let activation = Activation::new();
        let slot = RefCell::new(State::Loading);

        load_remote_list(
            "test",
            &activation,
            async { Err::<ListPage<u32, String>, _>(FetchError::Rejected(None)) },
            |s| *slot.borrow_mut() = s,
        )
        .await;

        let state = slot.borrow();
        assert!(!state.is_loading());
        assert_eq!(state.failure().map(|f| f.kind), Some(FailureKind::Rejected));
    }

    #[tokio::test]
    async fn test_discards_after_deactivation() {
        let activation = Activation::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let slot = RefCell::new(State::Loading);

        let fetch = async move {
            let _ = rx.await;
            Ok::<_, FetchError>(page(vec![9], None))
        };
        let deactivate = {
            let activation = activation.clone();
            async move {
                activation.deactivate();
                let _ = tx.send(());
            }
        };

        let (settled, _) = tokio::join!(
            load_remote_list("test", &activation, fetch, |s| *slot.borrow_mut() = s),
            deactivate
        );

        assert_eq!(settled, Settled::Discarded);
        assert!(slot.borrow().is_loading());
    }

    #[test]
    fn test_renew_retires_previous_activation() {
        let slot = ActivationSlot::new();
        let first = slot.renew();
        assert!(first.is_active());

        let second = slot.renew();
        assert!(!first.is_active());
        assert!(second.is_active());

        slot.retire();
        assert!(!second.is_active());
        slot.retire();
    }

    #[tokio::test]
    async fn test_retry_discards_earlier_fetch() {
        let slot = ActivationSlot::new();
        let state = RefCell::new(State::Loading);
        let (release_first, first_gate) = tokio::sync::oneshot::channel::<()>();

        let first = slot.renew();
        let slow_fetch = async move {
            let _ = first_gate.await;
            Ok::<_, FetchError>(page(vec![1], None))
        };

        let retry = {
            let slot = slot.clone();
            let state = &state;
            async move {
                let second = slot.renew();
                let settled = load_remote_list(
                    "test",
                    &second,
                    async { Ok::<_, FetchError>(page(vec![2], None)) },
                    |s| *state.borrow_mut() = s,
                )
                .await;
                let _ = release_first.send(());
                settled
            }
        };

        let (stale, fresh) = tokio::join!(
            load_remote_list("test", &first, slow_fetch, |s| *state.borrow_mut() = s),
            retry
        );

        assert_eq!(stale, Settled::Discarded);
        assert_eq!(fresh, Settled::Applied);
        assert_eq!(state.borrow().records(), &[2]);
    }
}
