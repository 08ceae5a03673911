//! Fetch plumbing for the three analysis-service operations
//!
//! One outstanding request per call, no retries. Failure handling follows
//! the configured [`FallbackPolicy`]: strict surfaces the typed error,
//! degraded logs it and substitutes catalog data.

use futures::future::{self, Either};
use gloo::console;
use gloo::timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use vegvision_common::{
    catalog, AnalysisResult, ApiError, ClientConfig, FallbackPolicy, PriceQuote, Result,
    UrlAnalysisRequest,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Analyzes a locally picked image file via multipart upload.
    pub async fn analyze_upload(&self, file: &File) -> Result<AnalysisResult> {
        self.with_analysis_fallback(self.request_upload(file).await)
    }

    /// Analyzes an image addressed by URL.
    pub async fn analyze_url(&self, image_url: &str) -> Result<AnalysisResult> {
        self.with_analysis_fallback(self.request_url(image_url).await)
    }

    /// Looks up the current market price for a produce name.
    pub async fn lookup_price(&self, product_name: &str) -> Result<PriceQuote> {
        let outcome = match self.get_request(&self.config.price_endpoint(product_name)) {
            Ok(request) => self.dispatch(request).await,
            Err(err) => Err(err),
        };
        if let (Err(err), FallbackPolicy::Degraded) = (&outcome, self.config.fallback) {
            console::warn!("price lookup degraded to fixed quote:", err.to_string());
        }
        catalog::apply_price_fallback(self.config.fallback, outcome)
    }

    /// Degraded mode resolves every analysis, substituting a catalog
    /// entry for the real result. The substitution is logged, never
    /// surfaced as an error.
    fn with_analysis_fallback(&self, outcome: Result<AnalysisResult>) -> Result<AnalysisResult> {
        if let (Err(err), FallbackPolicy::Degraded) = (&outcome, self.config.fallback) {
            console::warn!("analysis degraded to catalog data:", err.to_string());
        }
        catalog::apply_analysis_fallback(
            self.config.fallback,
            outcome,
            js_sys::Date::now() as u64,
        )
    }

    async fn request_upload(&self, file: &File) -> Result<AnalysisResult> {
        let form = FormData::new().map_err(network_error)?;
        form.append_with_blob("file", file).map_err(network_error)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        // the browser supplies the multipart content type and boundary
        opts.set_body(form.as_ref());

        let request = Request::new_with_str_and_init(&self.config.upload_endpoint(), &opts)
            .map_err(network_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(network_error)?;

        self.dispatch(request).await
    }

    async fn request_url(&self, image_url: &str) -> Result<AnalysisResult> {
        let body = serde_json::to_string(&UrlAnalysisRequest {
            image_url: image_url.to_string(),
        })
        .map_err(|e| ApiError::Network(format!("failed to encode request body: {}", e)))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.config.url_endpoint(), &opts)
            .map_err(network_error)?;
        let headers = request.headers();
        headers
            .set("Content-Type", "application/json")
            .map_err(network_error)?;
        headers
            .set("Accept", "application/json")
            .map_err(network_error)?;

        self.dispatch(request).await
    }

    fn get_request(&self, url: &str) -> Result<Request> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(network_error)?;
        Ok(request)
    }

    /// Issues the request and decodes the JSON body. Non-2xx statuses are
    /// opaque failures; unparsable bodies decode errors.
    async fn dispatch<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let fetch = JsFuture::from(window.fetch_with_request(&request));

        let resp_value = match self.config.timeout_ms {
            Some(ms) => match future::select(Box::pin(fetch), TimeoutFuture::new(ms)).await {
                Either::Left((resp, _)) => resp,
                Either::Right(_) => {
                    return Err(ApiError::Network(format!("request timed out after {ms} ms")))
                }
            },
            None => fetch.await,
        }
        .map_err(network_error)?;

        let resp: Response = resp_value.dyn_into().map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::Http {
                status: resp.status(),
            });
        }

        let json = JsFuture::from(resp.json().map_err(network_error)?)
            .await
            .map_err(|e| ApiError::Decode(js_value_message(&e)))?;
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn network_error(value: JsValue) -> ApiError {
    ApiError::Network(js_value_message(&value))
}

fn js_value_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
