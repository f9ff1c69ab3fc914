// Domain layer - Sensor statuses and figure geometry
pub mod figure;
pub mod status;
