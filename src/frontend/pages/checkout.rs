use crate::{
    common::{
        checkout::{SessionId, SESSION_ID_PARAM},
        confirmation::{
            run_confirmation,
            Clock,
            Confirmation,
            Destination,
            DisplayState,
            Navigator,
            SessionVerifier,
        },
    },
    frontend::{api::CLIENT, utils::clock::BrowserClock},
};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_query_map};
use phosphor_leptos::{Icon, CHECK_CIRCLE, CIRCLE_NOTCH, X_CIRCLE};

/// Landing page after checkout. Verifies the checkout session once, then counts down and
/// redirects to the dashboard or, if the payment did not go through, to the home page.
#[component]
pub fn CheckoutSuccess() -> impl IntoView {
    let session_id = use_query_map()
        .get_untracked()
        .get(SESSION_ID_PARAM)
        .map(SessionId::new);
    let confirmation = RwSignal::new(Confirmation::new(session_id));
    let state = Memo::new(move |_| confirmation.with(|c| c.state()));
    let countdown = Memo::new(move |_| confirmation.with(|c| c.countdown()));

    let navigate = use_navigate();
    let confirm_action = Action::new(move |_: &()| {
        let navigate = navigate.clone();
        async move {
            let navigator =
                move |destination: Destination| navigate(destination.path(), Default::default());
            confirm_checkout(confirmation, &*CLIENT, &BrowserClock, &navigator).await
        }
    });
    // effects only run in the browser, so the server always renders the loading state
    Effect::new(move |_| {
        let handle = confirm_action.dispatch(());
        on_cleanup(move || handle.abort());
    });

    view! {
        <Title text="Checkout" />
        <ConfirmationStatus state=state countdown=countdown />
    }
}

/// Drives the confirmation flow for the session stored in `confirmation`, and mirrors every
/// step back into the signal so the view follows the countdown.
async fn confirm_checkout<V, C, N>(
    confirmation: RwSignal<Confirmation>,
    verifier: &V,
    clock: &C,
    navigator: &N,
) -> Destination
where
    V: SessionVerifier,
    C: Clock,
    N: Navigator,
{
    let session_id = confirmation.with_untracked(|c| c.session_id().cloned());
    run_confirmation(session_id, verifier, clock, navigator, |c: &Confirmation| {
        confirmation.try_set(c.clone());
    })
    .await
}

#[component]
fn ConfirmationStatus(
    #[prop(into)] state: Signal<DisplayState>,
    #[prop(into)] countdown: Signal<u32>,
) -> impl IntoView {
    view! {
        <div class="grid h-screen place-items-center">
            {move || match state.get() {
                DisplayState::Loading => {
                    view! {
                        <div class="flex flex-col items-center text-center">
                            <div class="mb-4 rounded-full shadow-lg animate-spin shadow-info/50 text-info">
                                <Icon icon=CIRCLE_NOTCH size="64px" />
                            </div>
                            <h1 class="text-2xl font-bold">"Verifying your payment"</h1>
                            <p class="mt-2 text-slate-500">"This will only take a moment"</p>
                        </div>
                    }
                        .into_any()
                }
                DisplayState::Success => {
                    view! {
                        <div class="flex flex-col items-center text-center">
                            <div class="mb-4 rounded-full shadow-lg shadow-success/50 text-success">
                                <Icon icon=CHECK_CIRCLE size="64px" />
                            </div>
                            <h1 class="text-2xl font-bold">"Payment Successful"</h1>
                            <p class="mt-2 text-slate-500">
                                "Thank you for your purchase, your account has been upgraded."
                            </p>
                            <p class="mt-4">
                                "Redirecting to your dashboard in "
                                <span class="font-bold">{move || countdown.get()}</span>
                                " seconds"
                            </p>
                        </div>
                    }
                        .into_any()
                }
                DisplayState::Error => {
                    view! {
                        <div class="flex flex-col items-center text-center">
                            <div class="mb-4 rounded-full shadow-lg shadow-error/50 text-error">
                                <Icon icon=X_CIRCLE size="64px" />
                            </div>
                            <h1 class="text-2xl font-bold">"Card Declined"</h1>
                            <p class="mt-2 text-slate-500">
                                "Your payment could not be processed. No charges were made."
                            </p>
                            <p class="mt-4">
                                "Redirecting to the home page in "
                                <span class="font-bold">{move || countdown.get()}</span>
                                " seconds"
                            </p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
