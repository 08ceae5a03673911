//! Brand header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"VegVision"</h1>
            <p class="tagline">"Analyze fruits & vegetables with vision AI"</p>
        </header>
    }
}
