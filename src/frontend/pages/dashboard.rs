use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <Title text="Dashboard" />
        <div class="grid h-screen place-items-center">
            <h1 class="text-3xl font-bold">"Dashboard"</h1>
        </div>
    }
}
