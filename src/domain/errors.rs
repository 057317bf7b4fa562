//! Error types for every layer, composed into [`AppError`].

use derive_more::{Display, From};

/// Root error type surfaced to the host page
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Validation error: {}", _0)]
    Validation(ValidationError),
    #[display(fmt = "Frame error: {}", _0)]
    Frame(FrameError),
    #[display(fmt = "Infrastructure error: {}", _0)]
    Infrastructure(InfrastructureError),
}

/// Rejected input: malformed records or configuration
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ValidationError {
    #[display(fmt = "record {} is invalid: {}", index, reason)]
    InvalidRecord { index: usize, reason: String },
    #[display(fmt = "record {} is older than the record before it", index)]
    OutOfOrder { index: usize },
    #[display(fmt = "invalid configuration: {}", _0)]
    InvalidConfig(String),
}

/// Reasons a chart frame cannot be produced; all of them mean "draw nothing"
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum FrameError {
    #[display(fmt = "series is empty")]
    EmptySeries,
    #[display(fmt = "no record inside the visible window")]
    EmptyWindow,
    #[display(fmt = "visible price range is degenerate at {}", price)]
    DegenerateRange { price: f64 },
    #[display(fmt = "drawing surface has not been sized yet")]
    SurfaceNotReady,
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum InfrastructureError {
    #[display(fmt = "Network: {}", _0)]
    Network(NetworkError),
    #[display(fmt = "Parse: {}", _0)]
    Parse(String),
    #[display(fmt = "Rendering: {}", _0)]
    Rendering(RenderingError),
    #[display(fmt = "Browser API: {}", _0)]
    BrowserApi(String),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum NetworkError {
    #[display(fmt = "request failed: {}", _0)]
    HttpRequestFailed(String),
    #[display(fmt = "HTTP {} {}", status, status_text)]
    HttpStatus { status: u16, status_text: String },
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum RenderingError {
    #[display(fmt = "canvas unavailable: {}", _0)]
    CanvasAccessFailed(String),
    #[display(fmt = "path operation failed: {}", _0)]
    PathFailed(String),
}

impl std::error::Error for AppError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for FrameError {}
impl std::error::Error for InfrastructureError {}
impl std::error::Error for NetworkError {}
impl std::error::Error for RenderingError {}

impl From<NetworkError> for InfrastructureError {
    fn from(error: NetworkError) -> Self {
        InfrastructureError::Network(error)
    }
}

impl From<RenderingError> for InfrastructureError {
    fn from(error: RenderingError) -> Self {
        InfrastructureError::Rendering(error)
    }
}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        AppError::Infrastructure(error.into())
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

pub type RenderingResult<T> = Result<T, RenderingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_render_full_chain() {
        let error: AppError = NetworkError::HttpStatus { status: 404, status_text: "Not Found".into() }.into();
        assert_eq!(error.to_string(), "Infrastructure error: Network: HTTP 404 Not Found");
    }

    #[test]
    fn frame_errors_convert_into_app_error() {
        let error = AppError::from(FrameError::EmptySeries);
        assert_eq!(error, AppError::Frame(FrameError::EmptySeries));
    }
}
