//! Remote data loading with observable state
//!
//! A [`RemoteResource`] wraps one fetch operation and exposes its progress as
//! a [`ResourceState`]. Each mounted consumer owns its own resource; nothing
//! is cached or shared between consumers.
//!
//! Every fetch attempt gets a sequence number. When an attempt settles its
//! outcome is applied only if it is still the latest attempt issued, so the
//! most recent request wins no matter in which order the network answers.
//! Dropping (unmounting) the resource makes every later settlement a no-op;
//! the underlying request is left to finish on its own.

use crate::api::ApiResponse;
use crate::error::FetchError;
use futures_util::future::BoxFuture;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Future produced by a fetch operation
pub type FetchFuture<T> = BoxFuture<'static, Result<ApiResponse<T>, FetchError>>;

/// Observable state of a resource
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    /// A fetch attempt is in flight
    Loading,

    /// The latest attempt succeeded
    Success(T),

    /// The latest attempt failed; display-ready message
    Failure(String),
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ResourceState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResourceState::Loading)
    }

    /// Success or Failure
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ResourceState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ResourceState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Attempt bookkeeping, guarded together so issuing and settling never interleave
struct Control {
    issued: u64,
    alive: bool,
}

struct Shared<T> {
    control: Mutex<Control>,
    state: watch::Sender<ResourceState<T>>,
}

impl<T> Shared<T> {
    fn control(&self) -> MutexGuard<'_, Control> {
        self.control.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issue a new attempt and enter `Loading`; `None` once unmounted
    fn begin(&self) -> Option<u64> {
        let mut control = self.control();
        if !control.alive {
            return None;
        }
        control.issued += 1;
        self.state.send_replace(ResourceState::Loading);
        Some(control.issued)
    }

    fn settle(&self, attempt: u64, outcome: Result<ApiResponse<T>, FetchError>) {
        let control = self.control();
        if !control.alive {
            log::debug!("Discarding attempt {} of unmounted resource", attempt);
            return;
        }
        if attempt != control.issued {
            log::debug!(
                "Discarding stale attempt {} (latest is {})",
                attempt,
                control.issued
            );
            return;
        }

        let next = match outcome {
            Ok(response) => ResourceState::Success(response.data),
            Err(err) => {
                let message = err.user_message();
                log::error!("Data fetch error: {}", message);
                ResourceState::Failure(message)
            }
        };
        self.state.send_replace(next);
    }
}

/// One asynchronous data collection bound to a fetch operation
///
/// `D` is the dependency value the fetch reads (a page, for instance); a
/// change of dependencies starts a new attempt. Must be mounted from within
/// a tokio runtime.
pub struct RemoteResource<T, D = ()> {
    fetch: Box<dyn Fn(&D) -> FetchFuture<T> + Send + Sync>,
    deps: D,
    shared: Arc<Shared<T>>,
}

impl<T> RemoteResource<T, ()>
where
    T: Send + Sync + 'static,
{
    /// Mount a resource whose fetch takes no dependencies
    pub fn without_deps<F>(fetch: F) -> Self
    where
        F: Fn() -> FetchFuture<T> + Send + Sync + 'static,
    {
        Self::mount(move |_: &()| fetch(), ())
    }
}

impl<T, D> RemoteResource<T, D>
where
    T: Send + Sync + 'static,
    D: PartialEq,
{
    /// Mount the resource and start the first attempt immediately
    pub fn mount<F>(fetch: F, deps: D) -> Self
    where
        F: Fn(&D) -> FetchFuture<T> + Send + Sync + 'static,
    {
        let (state, _) = watch::channel(ResourceState::Loading);
        let resource = Self {
            fetch: Box::new(fetch),
            deps,
            shared: Arc::new(Shared {
                control: Mutex::new(Control {
                    issued: 0,
                    alive: true,
                }),
                state,
            }),
        };
        resource.start();
        resource
    }

    fn start(&self) {
        let Some(attempt) = self.shared.begin() else {
            return;
        };
        log::debug!(
            "Fetching {} (attempt {})",
            std::any::type_name::<T>(),
            attempt
        );

        let fetch = (self.fetch)(&self.deps);
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            let outcome = fetch.await;
            shared.settle(attempt, outcome);
        });
    }

    /// Re-enter `Loading` and start a new attempt
    ///
    /// Calls are not coalesced; only the last one issued can become visible.
    pub fn refetch(&self) {
        self.start();
    }

    /// Replace the dependencies, refetching if they differ from the current ones
    pub fn set_deps(&mut self, deps: D) {
        if deps != self.deps {
            self.deps = deps;
            self.start();
        }
    }

    /// Current dependencies
    pub fn deps(&self) -> &D {
        &self.deps
    }

    /// True only while in `Loading`
    pub fn loading(&self) -> bool {
        self.shared.state.borrow().is_loading()
    }

    /// Failure message, if the resource is in `Failure`
    pub fn error(&self) -> Option<String> {
        self.shared.state.borrow().error().map(str::to_string)
    }

    /// Watch state transitions
    pub fn subscribe(&self) -> watch::Receiver<ResourceState<T>> {
        self.shared.state.subscribe()
    }

    /// Tear down the resource; in-flight attempts settle into nothing
    pub fn unmount(self) {}
}

impl<T, D> RemoteResource<T, D>
where
    T: Clone + Send + Sync + 'static,
    D: PartialEq,
{
    /// Snapshot of the current state
    pub fn state(&self) -> ResourceState<T> {
        self.shared.state.borrow().clone()
    }

    /// Loaded data, if the resource is in `Success`
    pub fn data(&self) -> Option<T> {
        self.shared.state.borrow().data().cloned()
    }

    /// Wait until the resource reaches a terminal state and return it
    pub async fn settled(&self) -> ResourceState<T> {
        let mut receiver = self.subscribe();
        let settled = match receiver.wait_for(ResourceState::is_terminal).await {
            Ok(state) => Some((*state).clone()),
            Err(_) => None,
        };
        settled.unwrap_or_else(|| self.state())
    }
}

impl<T, D> Drop for RemoteResource<T, D> {
    fn drop(&mut self) {
        self.shared.control().alive = false;
    }
}
