// HTML page with the status form and the figure
use crate::domain::figure::SENSORS;
use crate::domain::status::StatusBoard;
use crate::infrastructure::svg_canvas::escape_xml;
use crate::presentation::form_state::SensorForm;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; }
form { margin-bottom: 1rem; }
input.field-invalid.field-touched { border: 2px solid #c62828; }
.error { color: #c62828; font-size: 0.9rem; }
.legend span { display: inline-block; width: 0.8rem; height: 0.8rem; border: 1px solid #333; margin-right: 0.3rem; }
"#;

pub fn render_page(form: &SensorForm, board: &StatusBoard, svg: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<title>Sensor Figure</title>");
    html.push_str(&format!("<style>{STYLE}</style></head><body>"));

    html.push_str("<form method=\"post\" action=\"/sensors\">");
    html.push_str("<label for=\"sensor_input\">Sensor status (9 x G/R/Y)</label> ");
    html.push_str(&format!(
        "<input id=\"sensor_input\" name=\"sensor_input\" type=\"text\" maxlength=\"32\" class=\"{}\" value=\"{}\" pattern=\"[GRYgry]{{9}}\" autocomplete=\"off\"/> ",
        form.css_classes(),
        escape_xml(&form.value)
    ));
    html.push_str("<button type=\"submit\">Update</button>");
    if form.show_error() {
        if let Some(error) = &form.error {
            html.push_str(&format!(
                "<div class=\"error\" role=\"alert\">{}</div>",
                escape_xml(&error.to_string())
            ));
        }
    }
    html.push_str("</form>");

    html.push_str(&format!("<div class=\"figure\">{svg}</div>"));

    html.push_str("<ul class=\"legend\">");
    let mut sensors: Vec<_> = SENSORS.iter().collect();
    sensors.sort_by_key(|s| s.sensor_id);
    for sensor in sensors {
        html.push_str(&format!(
            "<li><span style=\"background:{}\"></span>{} {}</li>",
            board.fill(sensor.sensor_id),
            sensor.sensor_id,
            escape_xml(sensor.slug.unwrap_or("")),
        ));
    }
    html.push_str("</ul>");

    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::{StatusCode, StatusError};

    #[test]
    fn test_pristine_page() {
        let html = render_page(&SensorForm::new(), &StatusBoard::empty(), "<svg></svg>");

        assert!(html.contains("action=\"/sensors\""));
        assert!(html.contains("<svg></svg>"));
        assert!(!html.contains("role=\"alert\""));
        assert_eq!(html.matches("background:lightgrey").count(), 9);
    }

    #[test]
    fn test_rejected_page_keeps_input() {
        let form = SensorForm::rejected("<GR>", StatusError::Length { found: 4 });
        let board = StatusBoard::from("GGGGGGGGG".parse::<StatusCode>().unwrap());
        let html = render_page(&form, &board, "");

        assert!(html.contains("value=\"&lt;GR&gt;\""));
        assert!(html.contains("field-invalid field-touched field-dirty"));
        assert!(html.contains("expected 9 characters, got 4"));
        assert_eq!(html.matches("background:green").count(), 9);
    }
}
