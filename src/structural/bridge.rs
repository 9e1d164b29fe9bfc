// Bridge: shapes (abstraction) draw through a renderer (implementation).

use crate::console::Transcript;

pub trait Renderer {
    fn render_circle(&self, out: &mut Transcript);
    fn render_square(&self, out: &mut Transcript);
}

pub struct VectorRenderer;

impl Renderer for VectorRenderer {
    fn render_circle(&self, out: &mut Transcript) {
        out.say("Rendering a circle in vector format.");
    }

    fn render_square(&self, out: &mut Transcript) {
        out.say("Rendering a square in vector format.");
    }
}

pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render_circle(&self, out: &mut Transcript) {
        out.say("Rendering a circle in raster format.");
    }

    fn render_square(&self, out: &mut Transcript) {
        out.say("Rendering a square in raster format.");
    }
}

pub trait Shape {
    fn draw(&self, out: &mut Transcript);
}

pub struct CircleShape<'a> {
    renderer: &'a dyn Renderer,
}

impl<'a> CircleShape<'a> {
    pub fn new(renderer: &'a dyn Renderer) -> Self {
        Self { renderer }
    }
}

impl Shape for CircleShape<'_> {
    fn draw(&self, out: &mut Transcript) {
        out.say("Drawing a circle.");
        self.renderer.render_circle(out);
    }
}

pub struct SquareShape<'a> {
    renderer: &'a dyn Renderer,
}

impl<'a> SquareShape<'a> {
    pub fn new(renderer: &'a dyn Renderer) -> Self {
        Self { renderer }
    }
}

impl Shape for SquareShape<'_> {
    fn draw(&self, out: &mut Transcript) {
        out.say("Drawing a square.");
        self.renderer.render_square(out);
    }
}

pub fn demo(out: &mut Transcript) {
    let vector = VectorRenderer;
    let raster = RasterRenderer;

    CircleShape::new(&vector).draw(out);
    SquareShape::new(&raster).draw(out);
}
