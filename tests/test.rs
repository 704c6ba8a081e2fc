#![expect(clippy::unwrap_used)]

mod common;

use crate::common::TestData;
use anyhow::Result;
use checkout_confirm::common::{
    checkout::{GetSessionStatusParams, SessionId, SessionStatus},
    confirmation::{
        run_confirmation,
        verify_session,
        Clock,
        Confirmation,
        Destination,
        DisplayState,
        COUNTDOWN_START,
    },
};
use pretty_assertions::assert_eq;
use std::{sync::Mutex, time::Duration};

/// Clock which doesn't actually wait, but remembers how long it was asked to.
#[derive(Default)]
struct InstantClock(Mutex<Vec<Duration>>);

impl Clock for InstantClock {
    async fn sleep(&self, duration: Duration) {
        self.0.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_get_session_status() -> Result<()> {
    let data = TestData::start().await;

    let params = GetSessionStatusParams {
        session_id: SessionId::new("sess_123"),
    };
    let res = data.get_session_status(&params).await?;
    assert_eq!(SessionStatus::new("complete"), res.status);

    let params = GetSessionStatusParams {
        session_id: SessionId::new("sess_456"),
    };
    let res = data.get_session_status(&params).await?;
    assert_eq!(SessionStatus::new("pending"), res.status);

    let params = GetSessionStatusParams {
        session_id: SessionId::new("sess_unknown"),
    };
    let res = data.get_session_status(&params).await;
    assert!(res.is_err());

    data.stop();
    Ok(())
}

#[tokio::test]
async fn test_verify_session() -> Result<()> {
    let data = TestData::start().await;

    let state = verify_session(Some(&SessionId::new("sess_123")), &data.api_client).await;
    assert_eq!(DisplayState::Success, state);

    for id in ["sess_456", "sess_expired", "sess_unknown"] {
        let state = verify_session(Some(&SessionId::new(id)), &data.api_client).await;
        assert_eq!(DisplayState::Error, state, "session {id}");
    }

    data.stop();
    Ok(())
}

#[tokio::test]
async fn test_confirmation_redirects() -> Result<()> {
    let data = TestData::start().await;

    let cases = [
        (Some("sess_123"), Destination::Dashboard),
        (Some("sess_456"), Destination::Home),
        (Some("sess_unknown"), Destination::Home),
        (None, Destination::Dashboard),
    ];
    for (session_id, expected) in cases {
        let clock = InstantClock::default();
        let navigated = Mutex::new(vec![]);
        let navigator = |d: Destination| navigated.lock().unwrap().push(d.path());
        let destination = run_confirmation(
            session_id.map(SessionId::new),
            &data.api_client,
            &clock,
            &navigator,
            |_: &Confirmation| {},
        )
        .await;
        assert_eq!(expected, destination);
        assert_eq!(vec![expected.path()], *navigated.lock().unwrap());
        assert_eq!(COUNTDOWN_START as usize, clock.0.lock().unwrap().len());
    }

    data.stop();
    Ok(())
}

#[tokio::test]
async fn test_checkout_page_renders_loading() -> Result<()> {
    let data = TestData::start().await;

    for query in ["?session_id=sess_123", "?session_id=sess_456", ""] {
        let url = format!("http://{}/checkout/success{query}", data.hostname);
        let res = reqwest::get(url).await?;
        assert_eq!(200, res.status().as_u16());
        let html = res.text().await?;
        assert!(html.contains("Verifying your payment"), "query {query}");
        assert!(!html.contains("Redirecting"), "query {query}");
        assert!(!html.contains("Card Declined"), "query {query}");
    }

    data.stop();
    Ok(())
}
