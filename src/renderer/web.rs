//! Browser surface: WebGPU for shapes, DOM overlay for text
//!
//! Text is kept out of the GPU path the same way the HUD always has been:
//! positioned elements on top of the canvas, only touched when they change.

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use super::frame::{Color, Frame, TextAlign, TextBaseline};
use super::pipeline::RenderState;
use super::shapes;
use super::surface::Surface;
use super::vertex::Vertex;
use crate::consts::{FONT_SIZE, GAME_SIZE};
use crate::platform::PlatformError;

/// Pool of absolutely positioned text elements over the canvas
pub struct TextOverlay {
    document: Document,
    root: HtmlElement,
    items: Vec<HtmlElement>,
    used: usize,
}

impl TextOverlay {
    pub fn new(document: &Document, canvas: &HtmlCanvasElement) -> Result<Self, PlatformError> {
        let root: HtmlElement = document
            .create_element("div")
            .map_err(PlatformError::js)?
            .dyn_into()
            .map_err(|_| PlatformError::NotAnElement("div"))?;
        root.set_id("text-overlay");

        let style = root.style();
        let size = format!("{}px", GAME_SIZE);
        for (prop, value) in [
            ("position", "absolute"),
            ("pointer-events", "none"),
            ("overflow", "hidden"),
            ("width", size.as_str()),
            ("height", size.as_str()),
            ("font-family", "sans-serif"),
        ] {
            style.set_property(prop, value).map_err(PlatformError::js)?;
        }

        let parent = canvas
            .parent_node()
            .ok_or(PlatformError::MissingElement("canvas parent"))?;
        parent.append_child(&root).map_err(PlatformError::js)?;

        let overlay = Self {
            document: document.clone(),
            root,
            items: Vec::new(),
            used: 0,
        };
        overlay.align_to(canvas);
        Ok(overlay)
    }

    /// Track the canvas position (after layout changes)
    pub fn align_to(&self, canvas: &HtmlCanvasElement) {
        let style = self.root.style();
        let _ = style.set_property("left", &format!("{}px", canvas.offset_left()));
        let _ = style.set_property("top", &format!("{}px", canvas.offset_top()));
    }

    pub fn begin(&mut self) {
        self.used = 0;
    }

    /// Hide every element not placed since `begin`
    pub fn finish(&mut self) {
        for item in &self.items[self.used..] {
            let _ = item.style().set_property("display", "none");
        }
    }

    pub fn place(
        &mut self,
        text: &str,
        pos: DVec2,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    ) {
        if self.used == self.items.len() {
            match self.create_item() {
                Ok(item) => self.items.push(item),
                Err(e) => {
                    log::warn!("Text overlay element unavailable: {}", e);
                    return;
                }
            }
        }

        let item = &self.items[self.used];
        self.used += 1;

        if item.text_content().as_deref() != Some(text) {
            item.set_text_content(Some(text));
        }

        let dx = match align {
            TextAlign::Left => "0%",
            TextAlign::Center => "-50%",
            TextAlign::Right => "-100%",
        };
        // Alphabetic is approximated by the ascent of a sans-serif face
        let dy = match baseline {
            TextBaseline::Top => "0%",
            TextBaseline::Alphabetic => "-80%",
        };

        let style = item.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("left", &format!("{}px", pos.x));
        let _ = style.set_property("top", &format!("{}px", pos.y));
        let _ = style.set_property("transform", &format!("translate({}, {})", dx, dy));
        let _ = style.set_property("color", &color.to_css());
    }

    fn create_item(&self) -> Result<HtmlElement, PlatformError> {
        let item: HtmlElement = self
            .document
            .create_element("span")
            .map_err(PlatformError::js)?
            .dyn_into()
            .map_err(|_| PlatformError::NotAnElement("span"))?;

        let style = item.style();
        let font_size = format!("{}px", FONT_SIZE);
        for (prop, value) in [
            ("position", "absolute"),
            ("white-space", "nowrap"),
            ("line-height", "1"),
            ("font-size", font_size.as_str()),
        ] {
            style.set_property(prop, value).map_err(PlatformError::js)?;
        }

        self.root.append_child(&item).map_err(PlatformError::js)?;
        Ok(item)
    }
}

/// The drawing surface handed to [`Frame::draw`] in the browser
pub struct WebSurface {
    pub gpu: RenderState,
    pub overlay: TextOverlay,
    vertices: Vec<Vertex>,
    clear: Color,
}

impl WebSurface {
    pub fn new(gpu: RenderState, overlay: TextOverlay) -> Self {
        Self {
            gpu,
            overlay,
            vertices: Vec::with_capacity(4096),
            clear: Color::BLACK,
        }
    }

    /// Draw a whole frame and present it
    pub fn present(&mut self, frame: &Frame) -> Result<(), wgpu::SurfaceError> {
        self.vertices.clear();
        self.clear = Color::BLACK;
        self.overlay.begin();

        frame.draw(self);

        self.overlay.finish();
        self.gpu.render(&self.vertices, self.clear)
    }
}

impl Surface for WebSurface {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        // A full-field fill hides everything drawn before it
        if origin.x <= 0.0 && origin.y <= 0.0 && size.x >= GAME_SIZE && size.y >= GAME_SIZE {
            self.vertices.clear();
            self.clear = color;
            return;
        }
        shapes::rect(origin, size, color, &mut self.vertices);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        shapes::circle(center, radius, color, &mut self.vertices);
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: DVec2,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    ) {
        self.overlay.place(text, pos, align, baseline, color);
    }
}
