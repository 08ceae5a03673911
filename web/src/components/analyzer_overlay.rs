//! Analyzing overlay component
//!
//! Purely cosmetic; shown while a request is in flight. The reveal timer
//! in the page, not this component, decides when results appear.

use leptos::prelude::*;

#[component]
pub fn AnalyzerOverlay() -> impl IntoView {
    view! {
        <div class="analyzer-overlay">
            <div class="scan-frame">
                <div class="scan-line" />
            </div>
            <p class="analyzer-text">"Analyzing your produce..."</p>
        </div>
    }
}
