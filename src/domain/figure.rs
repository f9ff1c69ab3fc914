// Stick figure geometry - fixed joint and sensor tables
use crate::domain::status::SENSOR_COUNT;

/// A point of the skeleton. Coordinates are normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    pub id: u8,
    pub x: f64,
    pub y: f64,
    pub to_id: u8,
    pub slug: &'static str,
    pub sensor_id: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensor {
    pub sensor_id: u8,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub slug: Option<&'static str>,
}

const fn joint(id: u8, x: f64, y: f64, to_id: u8, slug: &'static str, sensor_id: Option<u8>) -> Joint {
    Joint {
        id,
        x,
        y,
        to_id,
        slug,
        sensor_id,
    }
}

const fn sensor(sensor_id: u8, x: Option<f64>, y: f64, slug: &'static str) -> Sensor {
    Sensor {
        sensor_id,
        x,
        y: Some(y),
        slug: Some(slug),
    }
}

pub const JOINTS: [Joint; 10] = [
    joint(1, 0.5, 0.1, 1, "head", Some(1)),
    joint(2, 0.5, 0.2, 3, "nect", Some(2)),
    joint(4, 0.2, 0.2, 5, "right_hand", Some(3)),
    joint(5, 0.3, 0.3, 3, "right_shoulder", Some(4)),
    joint(6, 0.8, 0.2, 7, "left_hand", Some(6)),
    joint(7, 0.7, 0.3, 3, "left_shoulder", None),
    joint(3, 0.5, 0.3, 8, "chest", Some(5)),
    joint(9, 0.3, 0.8, 8, "right_foot", Some(7)),
    joint(10, 0.7, 0.8, 8, "left_foot", Some(9)),
    joint(8, 0.5, 0.6, 8, "foot_joint", Some(8)),
];

pub const SENSORS: [Sensor; 9] = [
    sensor(1, Some(0.5), 0.1, "head"),
    sensor(2, None, 0.2, "nect"),
    sensor(5, Some(0.5), 0.3, "chest"),
    sensor(3, Some(0.2), 0.2, "right_hand"),
    sensor(4, Some(0.3), 0.3, "right_shoulder"),
    sensor(6, Some(0.8), 0.3, "left_hand"),
    sensor(8, Some(0.5), 0.6, "foot_joint"),
    sensor(7, Some(0.3), 0.8, "right_foot"),
    sensor(9, Some(0.7), 0.8, "left_foot"),
];

pub fn find_joint(id: u8) -> Option<&'static Joint> {
    JOINTS.iter().find(|j| j.id == id)
}

pub fn find_sensor(sensor_id: u8) -> Option<&'static Sensor> {
    SENSORS.iter().find(|s| s.sensor_id == sensor_id)
}

/// Canvas position in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A joint that carries a sensor, placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub sensor_id: u8,
    pub slug: &'static str,
    pub center: Point,
}

/// The skeleton scaled to a canvas of `width` x `height` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width: f64,
    pub height: f64,
}

impl Figure {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn position(&self, joint_id: u8) -> Option<Point> {
        find_joint(joint_id).map(|j| self.scale(j))
    }

    /// Line segments for every joint linked to a different joint.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        JOINTS
            .iter()
            .filter(|j| j.to_id != j.id)
            .filter_map(|j| Some((self.scale(j), self.position(j.to_id)?)))
            .collect()
    }

    pub fn markers(&self) -> Vec<Marker> {
        JOINTS
            .iter()
            .filter_map(|j| {
                j.sensor_id.map(|sensor_id| Marker {
                    sensor_id,
                    slug: j.slug,
                    center: self.scale(j),
                })
            })
            .collect()
    }

    fn scale(&self, joint: &Joint) -> Point {
        Point {
            x: joint.x * self.width,
            y: joint.y * self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("joint id {0} appears more than once")]
    DuplicateJoint(u8),

    #[error("joint {from} links to unknown joint {to}")]
    DanglingLink { from: u8, to: u8 },

    #[error("sensor id {0} is outside 1..=9")]
    SensorOutOfRange(u8),

    #[error("sensor id {0} is attached to more than one joint")]
    DuplicateSensor(u8),
}

/// Check the fixed tables against their invariants.
pub fn validate_tables() -> Result<(), TableError> {
    let max = SENSOR_COUNT as u8;

    for (idx, j) in JOINTS.iter().enumerate() {
        if JOINTS[..idx].iter().any(|other| other.id == j.id) {
            return Err(TableError::DuplicateJoint(j.id));
        }
        if find_joint(j.to_id).is_none() {
            return Err(TableError::DanglingLink {
                from: j.id,
                to: j.to_id,
            });
        }
    }

    let attached = JOINTS.iter().filter_map(|j| j.sensor_id);
    let sensor_ids = attached.chain(SENSORS.iter().map(|s| s.sensor_id));
    for id in sensor_ids {
        if !(1..=max).contains(&id) {
            return Err(TableError::SensorOutOfRange(id));
        }
    }

    let mut seen = [false; SENSOR_COUNT];
    for id in JOINTS.iter().filter_map(|j| j.sensor_id) {
        let slot = &mut seen[usize::from(id) - 1];
        if *slot {
            return Err(TableError::DuplicateSensor(id));
        }
        *slot = true;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_valid() {
        assert_eq!(validate_tables(), Ok(()));
    }

    #[test]
    fn test_every_sensor_has_a_joint() {
        for s in &SENSORS {
            assert!(
                JOINTS.iter().any(|j| j.sensor_id == Some(s.sensor_id)),
                "sensor {} has no joint",
                s.sensor_id
            );
        }
        assert_eq!(find_sensor(2).and_then(|s| s.x), None);
        assert_eq!(find_sensor(6).and_then(|s| s.slug), Some("left_hand"));
    }

    #[test]
    fn test_position_scales_to_canvas() {
        let figure = Figure::new(400.0, 400.0);
        assert_eq!(figure.position(1), Some(Point { x: 200.0, y: 40.0 }));
        assert_eq!(figure.position(10), Some(Point { x: 280.0, y: 320.0 }));
        assert_eq!(figure.position(42), None);

        let wide = Figure::new(800.0, 400.0);
        assert_eq!(wide.position(8), Some(Point { x: 400.0, y: 240.0 }));
    }

    #[test]
    fn test_segments_skip_self_links() {
        let figure = Figure::new(400.0, 400.0);
        let segments = figure.segments();

        // head and foot_joint link to themselves
        assert_eq!(segments.len(), JOINTS.len() - 2);
        assert!(segments.iter().all(|(a, b)| a != b));
        assert!(segments.contains(&(
            Point { x: 200.0, y: 120.0 },
            Point { x: 200.0, y: 240.0 }
        )));
    }

    #[test]
    fn test_nine_markers() {
        let figure = Figure::new(400.0, 400.0);
        let markers = figure.markers();

        assert_eq!(markers.len(), 9);
        let mut ids: Vec<u8> = markers.iter().map(|m| m.sensor_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        assert!(markers.iter().all(|m| m.slug != "left_shoulder"));
    }
}
