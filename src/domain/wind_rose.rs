// Wind rose geometry, independent of any rendering surface
use super::weather::WeatherRecord;

pub const DEGREES_PER_SECTOR: f64 = 22.5;

/// Cardinal labels drawn around the rose, clockwise from north.
pub const CARDINAL_LABELS: [&str; 4] = ["N", "E", "S", "W"];

#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    pub sector: u8,
    pub value: f64,
    pub angle_degrees: f64,
    /// Length relative to the largest sector, in 0.0..=1.0.
    pub normalized: f64,
    /// Tip of the petal on a unit circle centred at the origin, y pointing down.
    pub tip_x: f64,
    pub tip_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindRose {
    pub max_value: f64,
    pub petals: Vec<Petal>,
}

impl WindRose {
    pub fn from_record(record: &WeatherRecord) -> Self {
        let max_value = record.max_wind_direction_value;
        let petals = record
            .wind_direction_histogram
            .iter()
            .map(|(&sector, &value)| {
                let angle_degrees = sector as f64 * DEGREES_PER_SECTOR;
                let normalized = if max_value > 0.0 { value / max_value } else { 0.0 };
                let radians = angle_degrees.to_radians();
                Petal {
                    sector,
                    value,
                    angle_degrees,
                    normalized,
                    tip_x: radians.sin() * normalized,
                    tip_y: -radians.cos() * normalized,
                }
            })
            .collect();

        Self { max_value, petals }
    }

    pub fn is_empty(&self) -> bool {
        self.petals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_petals_follow_sector_angles() {
        let mut record = WeatherRecord::empty("10".to_string());
        record.add_wind_observation(0, 500.0);
        record.add_wind_observation(4, 1000.0);
        record.add_wind_observation(12, 250.0);

        let rose = WindRose::from_record(&record);
        assert_eq!(rose.max_value, 1000.0);
        assert_eq!(rose.petals.len(), 3);

        let north = &rose.petals[0];
        assert_eq!(north.angle_degrees, 0.0);
        assert!(approx(north.normalized, 0.5));
        assert!(approx(north.tip_x, 0.0));
        assert!(approx(north.tip_y, -0.5));

        let east = &rose.petals[1];
        assert_eq!(east.angle_degrees, 90.0);
        assert!(approx(east.tip_x, 1.0));
        assert!(approx(east.tip_y, 0.0));

        let west = &rose.petals[2];
        assert_eq!(west.angle_degrees, 270.0);
        assert!(approx(west.tip_x, -0.25));
    }

    #[test]
    fn test_empty_histogram() {
        let record = WeatherRecord::empty("10".to_string());
        let rose = WindRose::from_record(&record);
        assert!(rose.is_empty());
        assert_eq!(rose.max_value, 0.0);
    }
}
