// State of the status-code form field
use crate::domain::status::StatusError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorForm {
    pub value: String,
    pub touched: bool,
    pub dirty: bool,
    pub error: Option<StatusError>,
}

impl SensorForm {
    /// A pristine field
    pub fn new() -> Self {
        Self::default()
    }

    /// Field after a rejected submission: keeps what the user typed.
    pub fn rejected(value: impl Into<String>, error: StatusError) -> Self {
        Self {
            value: value.into(),
            touched: true,
            dirty: true,
            error: Some(error),
        }
    }

    pub fn invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Show the error only once the user has interacted with the field
    pub fn show_error(&self) -> bool {
        self.invalid() && (self.touched || self.dirty)
    }

    pub fn css_classes(&self) -> String {
        let mut classes = vec![if self.invalid() { "field-invalid" } else { "field-valid" }];
        classes.push(if self.touched { "field-touched" } else { "field-untouched" });
        classes.push(if self.dirty { "field-dirty" } else { "field-pristine" });
        classes.join(" ")
    }
}
