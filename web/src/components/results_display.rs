//! Results display component
//!
//! Pure render of one analysis outcome next to the image it came from.
//! Price and quantity are optional and rendered only as a pair.

use leptos::prelude::*;
use vegvision_common::AnalysisResult;

#[component]
pub fn ResultsDisplay<F>(
    result: AnalysisResult,
    preview: Option<String>,
    on_reset: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let quality = result.quality.clamp(0.0, 100.0);
    let moisture = result.moisture.clamp(0.0, 100.0);
    let price_label = result.price_label();

    view! {
        <div class="results-card">
            {preview.map(|src| view! {
                <div class="results-image">
                    <img src=src alt=result.name.clone() />
                </div>
            })}

            <div class="results-body">
                <h2 class="results-name">{result.name.clone()}</h2>

                <div class="metric">
                    <span class="metric-label">"Quality"</span>
                    <div class="metric-bar">
                        <div
                            class="metric-fill quality"
                            style=format!("width: {}%", quality)
                        />
                    </div>
                    <span class="metric-value">{format!("{:.0}", quality)}</span>
                </div>

                <div class="metric">
                    <span class="metric-label">"Moisture"</span>
                    <div class="metric-bar">
                        <div
                            class="metric-fill moisture"
                            style=format!("width: {}%", moisture)
                        />
                    </div>
                    <span class="metric-value">{format!("{:.0}%", moisture)}</span>
                </div>

                <p class="results-size">
                    <span class="metric-label">"Size: "</span>
                    {result.size.clone()}
                </p>

                <p class="results-insight">{result.insight.clone()}</p>

                {price_label.map(|label| view! {
                    <p class="results-price">
                        <span class="metric-label">"Market price: "</span>
                        {label}
                    </p>
                })}

                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Analyze Another"
                </button>
            </div>
        </div>
    }
}
