// Sensor status domain models
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of sensors on the figure, and the length of a status code.
pub const SENSOR_COUNT: usize = 9;

/// Fill used for a sensor that has no status yet.
pub const UNKNOWN_FILL: &str = "lightgrey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SensorStatus {
    Green,
    Red,
    Yellow,
}

impl SensorStatus {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Green),
            'R' => Some(Self::Red),
            'Y' => Some(Self::Yellow),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Red => 'R',
            Self::Yellow => 'Y',
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("a status code is required")]
    Required,

    #[error("expected 9 characters, got {found}")]
    Length { found: usize },

    #[error("character {position} is {found:?}, expected one of G, R, Y")]
    InvalidCharacter { position: usize, found: char },
}

/// A validated status code: one status per sensor, in sensor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode([SensorStatus; SENSOR_COUNT]);

impl FromStr for StatusCode {
    type Err = StatusError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(StatusError::Required);
        }

        let found = input.chars().count();
        if found != SENSOR_COUNT {
            return Err(StatusError::Length { found });
        }

        let mut statuses = [SensorStatus::Green; SENSOR_COUNT];
        for (idx, c) in input.chars().enumerate() {
            statuses[idx] = SensorStatus::from_char(c).ok_or(StatusError::InvalidCharacter {
                position: idx + 1,
                found: c,
            })?;
        }

        Ok(Self(statuses))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{}", s.letter()))
    }
}

/// Current status per sensor. Slot `n - 1` belongs to sensor `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBoard {
    slots: [Option<SensorStatus>; SENSOR_COUNT],
}

impl StatusBoard {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn status(&self, sensor_id: u8) -> Option<SensorStatus> {
        let idx = usize::from(sensor_id).checked_sub(1)?;
        self.slots.get(idx).copied().flatten()
    }

    pub fn fill(&self, sensor_id: u8) -> &'static str {
        self.status(sensor_id)
            .map(SensorStatus::fill)
            .unwrap_or(UNKNOWN_FILL)
    }

    /// Upper-case code for a fully populated board.
    pub fn code(&self) -> Option<String> {
        self.slots
            .iter()
            .map(|slot| slot.map(SensorStatus::letter))
            .collect()
    }
}

impl From<StatusCode> for StatusBoard {
    fn from(code: StatusCode) -> Self {
        Self {
            slots: code.0.map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_mixed_case() {
        let code: StatusCode = "gRyGrYgRy".parse().unwrap();
        assert_eq!(code.to_string(), "GRYGRYGRY");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<StatusCode>(), Err(StatusError::Required));
        assert_eq!(
            "   ".parse::<StatusCode>(),
            Err(StatusError::Length { found: 3 })
        );
        assert_eq!(
            "         ".parse::<StatusCode>(),
            Err(StatusError::InvalidCharacter {
                position: 1,
                found: ' '
            })
        );
        assert_eq!(
            "GRYG".parse::<StatusCode>(),
            Err(StatusError::Length { found: 4 })
        );
        assert_eq!(
            "GRYGRYGRYG".parse::<StatusCode>(),
            Err(StatusError::Length { found: 10 })
        );
        assert_eq!(
            "GRYGXYGRY".parse::<StatusCode>(),
            Err(StatusError::InvalidCharacter {
                position: 5,
                found: 'X'
            })
        );
        assert_eq!(
            " GRYGRYGR".parse::<StatusCode>(),
            Err(StatusError::InvalidCharacter {
                position: 1,
                found: ' '
            })
        );
    }

    #[test]
    fn test_board_fills() {
        let board = StatusBoard::from("GRYGRYGRY".parse::<StatusCode>().unwrap());

        for id in [1, 4, 7] {
            assert_eq!(board.fill(id), "green");
        }
        for id in [2, 5, 8] {
            assert_eq!(board.fill(id), "red");
        }
        for id in [3, 6, 9] {
            assert_eq!(board.fill(id), "yellow");
        }
        assert_eq!(board.code().as_deref(), Some("GRYGRYGRY"));
    }

    #[test]
    fn test_empty_board_is_lightgrey() {
        let board = StatusBoard::empty();
        for id in 0..=10 {
            assert_eq!(board.fill(id), UNKNOWN_FILL);
        }
        assert_eq!(board.code(), None);
    }

    #[test]
    fn test_out_of_range_sensor_is_lightgrey() {
        let board = StatusBoard::from("GGGGGGGGG".parse::<StatusCode>().unwrap());
        assert_eq!(board.fill(0), UNKNOWN_FILL);
        assert_eq!(board.fill(10), UNKNOWN_FILL);
    }

    proptest! {
        #[test]
        fn prop_valid_codes_map_each_character(code in "[gryGRY]{9}") {
            let board = StatusBoard::from(code.parse::<StatusCode>().unwrap());

            for (idx, c) in code.chars().enumerate() {
                let expected = match c.to_ascii_uppercase() {
                    'G' => "green",
                    'R' => "red",
                    _ => "yellow",
                };
                prop_assert_eq!(board.fill(idx as u8 + 1), expected);
            }
        }

        #[test]
        fn prop_wrong_length_is_rejected(code in "[gryGRY]{0,8}|[gryGRY]{10,20}") {
            prop_assert!(code.parse::<StatusCode>().is_err());
        }

        #[test]
        fn prop_foreign_character_is_rejected(
            prefix in "[gryGRY]{0,8}",
            bad in "[^gryGRY]",
        ) {
            let mut code = prefix.clone();
            code.push_str(&bad);
            while code.chars().count() < SENSOR_COUNT {
                code.push('G');
            }
            prop_assert!(code.parse::<StatusCode>().is_err());
        }
    }
}
