// Figure painter - Draws the skeleton and its sensor markers onto a canvas
use crate::application::canvas::{Canvas, Stroke};
use crate::domain::figure::Figure;
use crate::domain::status::StatusBoard;

const HEAD_JOINT: u8 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    pub line: Stroke,
    pub marker_radius: f64,
    pub head_radius: f64,
}

#[derive(Debug, Clone)]
pub struct FigurePainter {
    figure: Figure,
    style: FigureStyle,
}

impl FigurePainter {
    pub fn new(figure: Figure, style: FigureStyle) -> Self {
        Self { figure, style }
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Bones first, then the head outline, then one marker per sensor.
    pub fn paint<C: Canvas>(&self, board: &StatusBoard, canvas: &mut C) {
        for (from, to) in self.figure.segments() {
            canvas.stroke_line(from, to, &self.style.line);
        }

        if let Some(head) = self.figure.position(HEAD_JOINT) {
            canvas.stroke_circle(head, self.style.head_radius, &self.style.line);
        }

        for marker in self.figure.markers() {
            canvas.fill_circle(
                marker.center,
                self.style.marker_radius,
                board.fill(marker.sensor_id),
                &self.style.line,
            );
        }
    }
}
