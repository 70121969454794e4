//! Rendering module
//!
//! `frame` turns a simulation scene into draw commands; a [`Surface`] executes
//! them. In the browser that is a WebGPU triangle pipeline plus a DOM text
//! overlay.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod surface;
pub mod vertex;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use frame::{Color, DrawCommand, Frame, TextAlign, TextBaseline, compose};
pub use pipeline::RenderState;
pub use surface::{RecordingSurface, Surface};
#[cfg(target_arch = "wasm32")]
pub use web::{TextOverlay, WebSurface};
