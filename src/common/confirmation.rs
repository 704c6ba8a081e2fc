//! Two stage state machine behind the checkout confirmation page: first the checkout session is
//! verified once, then a countdown runs which ends with a single redirect.
//!
//! Time, navigation and the verification call are all passed in, so that the flow can be driven
//! by browser timers and the router in the frontend, and by fakes in tests.

use super::checkout::{SessionId, SessionStatus, DASHBOARD_PATH, HOME_PATH};
use log::{debug, warn};
use std::{fmt::Display, future::Future, time::Duration};

/// Seconds shown before redirecting.
pub const COUNTDOWN_START: u32 = 5;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Loading,
    Success,
    Error,
}

impl DisplayState {
    pub fn is_terminal(self) -> bool {
        self != Self::Loading
    }

    /// Where the user is sent once the countdown runs out.
    pub fn destination(self) -> Option<Destination> {
        match self {
            Self::Loading => None,
            Self::Success => Some(Destination::Dashboard),
            Self::Error => Some(Destination::Home),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Home,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => DASHBOARD_PATH,
            Self::Home => HOME_PATH,
        }
    }
}

/// Capability to look up the status of a checkout session on the backend.
pub trait SessionVerifier {
    type Error: Display;

    fn verify_session(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<SessionStatus, Self::Error>>;
}

pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

pub trait Navigator {
    fn navigate(&self, destination: Destination);
}

impl<F> Navigator for F
where
    F: Fn(Destination),
{
    fn navigate(&self, destination: Destination) {
        self(destination)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    session_id: Option<SessionId>,
    state: DisplayState,
    countdown: u32,
    finished: bool,
}

impl Confirmation {
    pub fn new(session_id: Option<SessionId>) -> Self {
        Self {
            session_id,
            state: DisplayState::Loading,
            countdown: COUNTDOWN_START,
            finished: false,
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Leave the loading state. Only the first terminal state is taken, later calls are ignored.
    pub fn resolve(&mut self, state: DisplayState) {
        if self.state.is_terminal() || !state.is_terminal() {
            return;
        }
        self.state = state;
    }

    /// Advance the countdown by one tick. Returns the destination on the tick which reaches zero,
    /// and nothing on every other tick including all ticks while still loading.
    pub fn tick(&mut self) -> Option<Destination> {
        let destination = self.state.destination()?;
        if self.finished {
            return None;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.finished = true;
            Some(destination)
        } else {
            None
        }
    }
}

/// Decide the display state for a checkout session. Without session there is nothing to pay for,
/// so it counts as success without calling the backend. Otherwise exactly one call is made.
pub async fn verify_session<V>(session_id: Option<&SessionId>, verifier: &V) -> DisplayState
where
    V: SessionVerifier,
{
    let Some(session_id) = session_id else {
        debug!("No checkout session given, skipping verification");
        return DisplayState::Success;
    };
    match verifier.verify_session(session_id).await {
        Ok(status) if status.is_complete() => DisplayState::Success,
        Ok(status) => {
            warn!("Checkout session {session_id} was declined with status {status}");
            DisplayState::Error
        }
        Err(e) => {
            warn!("Unable to verify checkout session {session_id}: {e}");
            DisplayState::Error
        }
    }
}

/// Run the whole confirmation flow to its end and return where the user was sent.
///
/// `on_change` sees the machine after it leaves the loading state and after every tick, the last
/// call happens right before navigating.
pub async fn run_confirmation<V, C, N, R>(
    session_id: Option<SessionId>,
    verifier: &V,
    clock: &C,
    navigator: &N,
    on_change: R,
) -> Destination
where
    V: SessionVerifier,
    C: Clock,
    N: Navigator,
    R: Fn(&Confirmation),
{
    let mut confirmation = Confirmation::new(session_id);
    let state = verify_session(confirmation.session_id(), verifier).await;
    confirmation.resolve(state);
    on_change(&confirmation);
    loop {
        clock.sleep(TICK_INTERVAL).await;
        let destination = confirmation.tick();
        on_change(&confirmation);
        if let Some(destination) = destination {
            navigator.navigate(destination);
            return destination;
        }
    }
}
