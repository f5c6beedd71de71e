//! App state context and the command dispatcher.

use dioxus::prelude::*;

use crate::controller::{Command, Outcome, StateSlot};
use crate::platform::{make_controller, AppController};
use crate::state::AppState;

/// Sends [`Command`]s to the controller and publishes the resulting state.
///
/// The state is snapshotted before the command runs and committed once it
/// completes; no signal is held across an await.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    app: Signal<AppState>,
    controller: Signal<AppController>,
}

impl Dispatcher {
    pub async fn send(self, command: Command) -> Outcome {
        let controller = AppController::clone(&self.controller.peek());
        controller.dispatch(&self.app, command).await
    }
}

impl StateSlot for Signal<AppState> {
    fn snapshot(&self) -> AppState {
        AppState::clone(&self.peek())
    }

    fn publish(&self, started: u64, next: AppState) -> bool {
        let mut app = *self;
        let current = app.peek().epoch;
        current == started && app.write().commit(started, next)
    }
}

/// Get the current application state.
pub fn use_app() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Get the dispatcher for sending commands.
pub fn use_dispatch() -> Dispatcher {
    use_context::<Dispatcher>()
}

/// Provider component that owns the app state and restores the stored
/// session on mount.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let app = use_signal(AppState::default);
    let controller = use_signal(make_controller);
    let dispatch = use_context_provider(|| Dispatcher { app, controller });
    use_context_provider(|| app);

    use_future(move || async move {
        dispatch.send(Command::Bootstrap).await;
    });

    rsx! {
        {children}
    }
}
