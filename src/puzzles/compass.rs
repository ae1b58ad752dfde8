//! The 32-point compass rose.

use serde::{Deserialize, Serialize};

/// Angle between neighbouring compass points, in degrees.
pub const POINT_STEP_DEGREES: f64 = 11.25;

const CARDINALS: [&str; 4] = ["N", "E", "S", "W"];

/// One named point of the compass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompassPoint {
    pub abbreviation: String,
    pub azimuth: f64,
}

/// Build all 32 compass points clockwise from north.
///
/// Only the four cardinal letters are used as input; every other name is
/// derived from the quarter it lies in. Within the quarter from `cur` to
/// `next` the intercardinal `mid` is written north/south first (`NE`, `SE`,
/// `SW`, `NW`) and the eight points follow the pattern
/// `cur, cur b next, cur mid, mid b cur, mid, mid b next, next mid, next b cur`.
pub fn create_compass_points() -> Vec<CompassPoint> {
    let mut points = Vec::with_capacity(32);
    for (side, cur) in CARDINALS.iter().enumerate() {
        let next = CARDINALS[(side + 1) % CARDINALS.len()];
        let mid = if side % 2 == 0 {
            format!("{}{}", cur, next)
        } else {
            format!("{}{}", next, cur)
        };
        let names = [
            cur.to_string(),
            format!("{}b{}", cur, next),
            format!("{}{}", cur, mid),
            format!("{}b{}", mid, cur),
            mid.clone(),
            format!("{}b{}", mid, next),
            format!("{}{}", next, mid),
            format!("{}b{}", next, cur),
        ];
        for (offset, abbreviation) in names.into_iter().enumerate() {
            points.push(CompassPoint {
                abbreviation,
                azimuth: (side * 8 + offset) as f64 * POINT_STEP_DEGREES,
            });
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_table() {
        let expected = [
            "N", "NbE", "NNE", "NEbN", "NE", "NEbE", "ENE", "EbN", "E", "EbS", "ESE", "SEbE", "SE",
            "SEbS", "SSE", "SbE", "S", "SbW", "SSW", "SWbS", "SW", "SWbW", "WSW", "WbS", "W", "WbN",
            "WNW", "NWbW", "NW", "NWbN", "NNW", "NbW",
        ];
        let points = create_compass_points();
        assert_eq!(points.len(), 32);
        for (i, (point, name)) in points.iter().zip(expected).enumerate() {
            assert_eq!(point.abbreviation, name);
            assert_eq!(point.azimuth, i as f64 * 11.25);
        }
    }

    #[test]
    fn test_compass_is_deterministic() {
        assert_eq!(create_compass_points(), create_compass_points());
        assert_eq!(create_compass_points()[31].azimuth, 348.75);
    }
}
