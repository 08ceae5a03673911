//! Interaction state machine
//!
//! Owns the current image selection, the current result, and the
//! in-flight request bookkeeping for one analyzer page:
//!
//!   Idle -> Selected -> Analyzing -> Result -> (reset) -> Idle
//!
//! The machine is platform-neutral; the web layer mirrors it into
//! signals and performs the actual network call. Completions are
//! guarded by a [`RequestToken`] so a response that arrives after a
//! reset or a new selection is discarded instead of applied to stale
//! state.

use crate::types::AnalysisResult;
use thiserror::Error;

/// Where the image under analysis comes from. File selection and URL
/// submission are mutually exclusive; the most recent one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A locally picked file, identified by name. The handle itself stays
    /// with the platform layer.
    File { name: String },
    Url(String),
}

/// Observable phase, derived from session content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selected,
    Analyzing,
    Result,
}

/// Identifies one analysis request. Completions carrying a token that is
/// no longer current are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Analysis triggered with neither a file nor a URL selected.
    #[error("no image selected")]
    NoImage,

    /// Analysis triggered while a request is already in flight.
    #[error("analysis already in progress")]
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    source: Option<ImageSource>,
    result: Option<AnalysisResult>,
    in_flight: Option<u64>,
    generation: u64,
}

impl AnalysisSession {
    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Analyzing
        } else if self.result.is_some() {
            Phase::Result
        } else if self.source.is_some() {
            Phase::Selected
        } else {
            Phase::Idle
        }
    }

    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Selects a local file, clearing any prior result and any prior URL.
    /// Invalidates an in-flight request: its completion will be stale.
    pub fn select_file(&mut self, name: impl Into<String>) {
        self.source = Some(ImageSource::File { name: name.into() });
        self.result = None;
        self.in_flight = None;
    }

    /// Submits an image URL, clearing any prior result and any prior file.
    pub fn submit_url(&mut self, url: impl Into<String>) {
        self.source = Some(ImageSource::Url(url.into()));
        self.result = None;
        self.in_flight = None;
    }

    /// Starts an analysis of the current selection.
    ///
    /// Fails with `Busy` while a request is outstanding (at most one at a
    /// time) and with `NoImage` when nothing is selected; neither failure
    /// changes state.
    pub fn begin_analysis(&mut self) -> Result<RequestToken, SessionError> {
        if self.in_flight.is_some() {
            return Err(SessionError::Busy);
        }
        if self.source.is_none() {
            return Err(SessionError::NoImage);
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.result = None;
        Ok(RequestToken(self.generation))
    }

    /// Applies a finished analysis. Returns false (and changes nothing)
    /// when the token is stale.
    pub fn complete(&mut self, token: RequestToken, result: AnalysisResult) -> bool {
        if self.in_flight != Some(token.0) {
            return false;
        }
        self.in_flight = None;
        self.result = Some(result);
        true
    }

    /// Records a failed analysis. The selection is retained so the user
    /// can retry. Returns false when the token is stale.
    pub fn fail(&mut self, token: RequestToken) -> bool {
        if self.in_flight != Some(token.0) {
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Returns to `Idle`: selection, result, and any in-flight request
    /// are all dropped.
    pub fn reset(&mut self) {
        self.source = None;
        self.result = None;
        self.in_flight = None;
    }
}
