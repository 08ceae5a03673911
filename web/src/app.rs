//! Analyzer page
//!
//! Holds the interaction state machine and drives the analysis flow:
//! selection -> analyze -> reveal -> reset. The network fetch and the
//! cosmetic reveal timer run concurrently, and a completion is applied
//! only while its request token is still current.

use crate::api::ApiClient;
use crate::components::{
    analyzer_overlay::AnalyzerOverlay, header::Header, results_display::ResultsDisplay,
    upload_area::UploadArea,
};
use gloo::console;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vegvision_common::{
    AnalysisResult, AnalysisSession, ApiError, ClientConfig, FallbackPolicy, ImageSource, Phase,
    Result, SessionError,
};
use web_sys::File;

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// How long the scan animation plays before a finished result is shown.
/// Cosmetic only; overridable via `data-reveal-ms` on the mount element.
const DEFAULT_REVEAL_MS: u32 = 1500;

/// Transient user notice (validation or failure). Every producer reports
/// a problem, so it always renders in the error style.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
}

fn validation_notice() -> Notice {
    Notice {
        message: "No image selected. Please upload an image or provide a URL.".to_string(),
    }
}

fn failure_notice(error: &ApiError) -> Notice {
    let message = match error {
        ApiError::Http { status } => format!(
            "Analysis failed (HTTP {}). Please try again.",
            status
        ),
        _ => "There was a problem analyzing your image. Please try again.".to_string(),
    };
    Notice { message }
}

/// Reads page-level configuration from data attributes on `<body>`:
/// `data-api-base`, `data-fallback="degraded"`, `data-reveal-ms`.
fn page_config() -> (ClientConfig, u32) {
    let attr = |name: &str| {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute(name))
    };

    let base = attr("data-api-base").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    let mut config = ClientConfig::new(base);
    if attr("data-fallback").as_deref() == Some("degraded") {
        config.fallback = FallbackPolicy::Degraded;
    }
    let reveal_ms = attr("data-reveal-ms")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_REVEAL_MS);

    (config, reveal_ms)
}

async fn run_analysis(
    client: &ApiClient,
    source: Option<ImageSource>,
    file: Option<File>,
) -> Result<AnalysisResult> {
    match source {
        Some(ImageSource::File { .. }) => {
            let file = file.ok_or_else(|| ApiError::Network("file handle lost".to_string()))?;
            client.analyze_upload(&file).await
        }
        Some(ImageSource::Url(url)) => client.analyze_url(&url).await,
        None => Err(ApiError::Network("no image selected".to_string())),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (config, reveal_ms) = page_config();
    let client = StoredValue::new(ApiClient::new(config));

    let session = RwSignal::new(AnalysisSession::default());
    let picked_file = RwSignal::new_local(None::<File>);
    let preview = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<Notice>);

    let phase = Memo::new(move |_| session.with(|s| s.phase()));
    let busy = Signal::derive(move || phase.get() == Phase::Analyzing);

    let on_file_selected = move |file: File, data_url: String| {
        session.update(|s| s.select_file(file.name()));
        picked_file.set(Some(file));
        preview.set(Some(data_url));
        notice.set(None);
    };

    let on_url_submitted = move |url: String| {
        session.update(|s| s.submit_url(url.clone()));
        picked_file.set(None);
        preview.set(Some(url));
        notice.set(None);
    };

    let on_analyze = move |_: ()| {
        let started = session.try_update(|s| s.begin_analysis());
        match started {
            Some(Ok(token)) => {
                notice.set(None);
                let source = session.with_untracked(|s| s.source().cloned());
                let file = picked_file.get_untracked();
                let client = client.get_value();

                spawn_local(async move {
                    // data-ready and UI-ready are decoupled: the fetch and
                    // the reveal timer run side by side
                    let (outcome, _) = futures::join!(
                        run_analysis(&client, source, file),
                        TimeoutFuture::new(reveal_ms)
                    );

                    match outcome {
                        Ok(mut result) => {
                            if !result.has_price() {
                                // price is a nice-to-have; a lookup failure
                                // leaves the pair absent
                                if let Ok(quote) = client.lookup_price(&result.name).await {
                                    result.attach_price(quote);
                                }
                            }
                            session.update(|s| {
                                s.complete(token, result);
                            });
                        }
                        Err(error) => {
                            let current = session
                                .try_update(|s| s.fail(token))
                                .unwrap_or(false);
                            if current {
                                console::error!("analysis failed:", error.to_string());
                                notice.set(Some(failure_notice(&error)));
                            }
                        }
                    }
                });
            }
            Some(Err(SessionError::NoImage)) => notice.set(Some(validation_notice())),
            // second trigger while a request is in flight is ignored
            Some(Err(SessionError::Busy)) | None => {}
        }
    };

    let on_reset = move |_: ()| {
        session.update(|s| s.reset());
        picked_file.set(None);
        preview.set(None);
        notice.set(None);
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea
                busy=busy
                on_file_selected=on_file_selected
                on_url_submitted=on_url_submitted
            />

            {move || notice.get().map(|n| view! {
                <div class="notice notice-error">
                    <span>{n.message.clone()}</span>
                    <button class="notice-dismiss" on:click=move |_| notice.set(None)>
                        "×"
                    </button>
                </div>
            })}

            <Show when=move || phase.get() == Phase::Selected>
                <div class="analyze-section">
                    {move || preview.get().map(|src| view! {
                        <img class="preview-image" src=src alt="selected produce" />
                    })}
                    <button class="btn btn-primary" on:click=move |_| on_analyze(())>
                        "Analyze Now"
                    </button>
                </div>
            </Show>

            <Show when=move || busy.get()>
                <AnalyzerOverlay />
            </Show>

            {move || session.with(|s| s.result().cloned()).map(|result| view! {
                <ResultsDisplay
                    result=result
                    preview=preview.get()
                    on_reset=on_reset
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_notice_text() {
        let n = validation_notice();
        assert!(n.message.contains("No image selected"));
    }

    #[test]
    fn test_failure_notice_carries_status() {
        let n = failure_notice(&ApiError::Http { status: 500 });
        assert!(n.message.contains("HTTP 500"));
    }

    #[test]
    fn test_failure_notice_network() {
        let n = failure_notice(&ApiError::Network("unreachable".to_string()));
        assert!(n.message.contains("try again"));
        assert!(!n.message.contains("HTTP"));
    }
}
