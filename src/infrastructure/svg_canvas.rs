// SVG implementation of the drawing surface
use crate::application::canvas::{Canvas, Stroke};
use crate::domain::figure::Point;

pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64, background: &str) -> Self {
        let mut body = String::new();
        body.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            escape_xml(background)
        ));
        Self {
            width,
            height,
            body,
        }
    }

    pub fn finish(self) -> String {
        let (width, height) = (self.width, self.height);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">{}</svg>",
            self.body
        )
    }
}

impl Canvas for SvgCanvas {
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.body.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            escape_xml(&stroke.color),
            stroke.width
        ));
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &Stroke) {
        self.body.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            center.x,
            center.y,
            radius,
            escape_xml(&stroke.color),
            stroke.width
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: &str, stroke: &Stroke) {
        self.body.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            center.x,
            center.y,
            radius,
            escape_xml(fill),
            escape_xml(&stroke.color),
            stroke.width
        ));
    }
}

pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_document() {
        let mut canvas = SvgCanvas::new(400.0, 300.0, "white");
        let stroke = Stroke::new("black", 2.0);
        canvas.stroke_line(Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 20.5 }, &stroke);
        canvas.fill_circle(Point { x: 5.0, y: 5.0 }, 8.0, "red", &stroke);
        let svg = canvas.finish();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"300\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<line x1=\"0.00\" y1=\"0.00\" x2=\"10.00\" y2=\"20.50\" stroke=\"black\""));
        assert!(svg.contains("<circle cx=\"5.00\" cy=\"5.00\" r=\"8.00\" fill=\"red\""));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
