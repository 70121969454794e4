//! Platform abstraction layer
//!
//! Handles the browser/native seams:
//! - Frame timing (rAF timestamps to deltas, FPS)
//! - Key mapping
//! - The game driver that owns state, input and audio
//! - Setup errors

pub mod clock;
pub mod driver;
pub mod input;

pub use clock::{FpsCounter, FrameClock};
pub use driver::Game;
pub use input::Key;

/// Failures while wiring the game into the page
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("element is not a {0}")]
    NotAnElement(&'static str),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    UnsupportedSurface,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl PlatformError {
    /// Wrap a thrown JS value
    pub fn js(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::Js(format!("{:?}", value))
    }
}
