// HTTP request handlers
use crate::domain::figure::find_sensor;
use crate::domain::status::{SensorStatus, SENSOR_COUNT};
use crate::infrastructure::http_response::{accepts_brotli, html_response, svg_response};
use crate::presentation::app_state::AppState;
use crate::presentation::form_state::SensorForm;
use crate::presentation::page::render_page;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SensorSubmission {
    #[serde(default)]
    pub sensor_input: String,
}

#[derive(Debug, Serialize)]
pub struct SensorView {
    pub sensor_id: u8,
    pub slug: Option<&'static str>,
    pub status: Option<SensorStatus>,
    pub fill: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BoardView {
    pub code: Option<String>,
    pub sensors: Vec<SensorView>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Form and figure for the current board
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let board = state.sensor_service.board().await;
    let form = SensorForm {
        value: state.sensor_service.last_input().await.unwrap_or_default(),
        ..SensorForm::new()
    };
    let svg = state.sensor_service.render_board(&board);

    match html_response(StatusCode::OK, render_page(&form, &board, &svg)) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Form submission: redraw on a valid code, otherwise mark the field invalid
pub async fn submit_sensors(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<SensorSubmission>,
) -> impl IntoResponse {
    match state.sensor_service.submit(&submission.sensor_input).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            let board = state.sensor_service.board().await;
            let form = SensorForm::rejected(submission.sensor_input, e);
            let svg = state.sensor_service.render_board(&board);

            match html_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                render_page(&form, &board, &svg),
            ) {
                Ok(response) => response,
                Err(status) => status.into_response(),
            }
        }
    }
}

/// Current board as JSON
pub async fn get_sensors(State(state): State<Arc<AppState>>) -> Json<BoardView> {
    let board = state.sensor_service.board().await;

    let sensors = (1..=SENSOR_COUNT as u8)
        .map(|sensor_id| SensorView {
            sensor_id,
            slug: find_sensor(sensor_id).and_then(|s| s.slug),
            status: board.status(sensor_id),
            fill: board.fill(sensor_id),
        })
        .collect();

    Json(BoardView {
        code: board.code(),
        sensors,
    })
}

/// The figure alone as an SVG document
pub async fn figure_svg(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);
    let svg = state.sensor_service.render_svg().await;

    match svg_response(svg, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
