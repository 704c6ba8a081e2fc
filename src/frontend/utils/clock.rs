use crate::common::confirmation::Clock;
use futures::channel::oneshot;
use leptos::prelude::set_timeout;
use std::time::Duration;

/// Sleeps on browser timers. Only usable after hydration, on the server there is no `window`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        let (tx, rx) = oneshot::channel();
        set_timeout(
            move || {
                tx.send(()).ok();
            },
            duration,
        );
        // a dropped timer also wakes up, the countdown keeps going either way
        rx.await.ok();
    }
}
