// Sensor service - Use case for submitting status codes and redrawing the figure
use crate::application::figure_painter::FigurePainter;
use crate::application::status_store::StatusStore;
use crate::domain::status::{StatusBoard, StatusCode, StatusError};
use crate::infrastructure::svg_canvas::SvgCanvas;
use std::sync::Arc;

#[derive(Clone)]
pub struct SensorService {
    store: Arc<dyn StatusStore>,
    painter: FigurePainter,
    background: String,
}

impl SensorService {
    pub fn new(store: Arc<dyn StatusStore>, painter: FigurePainter, background: String) -> Self {
        Self {
            store,
            painter,
            background,
        }
    }

    /// Validate `input` and, if it is a status code, replace the board with it.
    /// An invalid input leaves the board untouched.
    pub async fn submit(&self, input: &str) -> Result<StatusBoard, StatusError> {
        let code = match input.parse::<StatusCode>() {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!("Rejected status code {:?}: {}", input, e);
                return Err(e);
            }
        };

        let board = StatusBoard::from(code);
        self.store.replace(board, input.to_string()).await;
        tracing::info!("Sensor status updated: {}", code);

        Ok(board)
    }

    pub async fn board(&self) -> StatusBoard {
        self.store.current().await
    }

    /// The accepted input as the user typed it
    pub async fn last_input(&self) -> Option<String> {
        self.store.last_input().await
    }

    /// Paint the current board as an SVG document
    pub async fn render_svg(&self) -> String {
        let board = self.board().await;
        self.render_board(&board)
    }

    pub fn render_board(&self, board: &StatusBoard) -> String {
        let figure = self.painter.figure();
        let mut canvas = SvgCanvas::new(figure.width, figure.height, &self.background);
        self.painter.paint(board, &mut canvas);
        canvas.finish()
    }
}
