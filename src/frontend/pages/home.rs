use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="grid h-screen place-items-center">
            <h1 class="text-3xl font-bold">"Welcome"</h1>
        </div>
    }
}
