// Drawing surface trait used by the figure painter
use crate::domain::figure::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// Direct-mode 2D drawing calls.
pub trait Canvas {
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &Stroke);

    /// Filled circle with an outline
    fn fill_circle(&mut self, center: Point, radius: f64, fill: &str, stroke: &Stroke);
}
