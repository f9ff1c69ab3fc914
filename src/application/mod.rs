// Application layer - Use cases and the seams they depend on
pub mod canvas;
pub mod figure_painter;
pub mod sensor_service;
pub mod status_store;
