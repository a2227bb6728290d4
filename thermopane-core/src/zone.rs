//! Temperature zone classification
//!
//! Readings fall into three bands around the comfort range:
//!
//! ```text
//!   Critical │ Warn │   Safe   │ Warn │ Critical
//! ──────────[21]───[23]──────[25]───[27]──────────  °C
//! ```
//!
//! Safe and Warn bounds are inclusive on the side facing the safe band.

/// Lower edge of the warning band (inclusive)
pub const WARN_LOW_C: f32 = 21.0;

/// Lower edge of the safe band (inclusive)
pub const SAFE_LOW_C: f32 = 23.0;

/// Upper edge of the safe band (inclusive)
pub const SAFE_HIGH_C: f32 = 25.0;

/// Upper edge of the warning band (inclusive)
pub const WARN_HIGH_C: f32 = 27.0;

const _: () = assert!(WARN_LOW_C < SAFE_LOW_C);
const _: () = assert!(SAFE_LOW_C < SAFE_HIGH_C);
const _: () = assert!(SAFE_HIGH_C < WARN_HIGH_C);

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const DARK_GREEN: Rgb = Rgb::new(0, 100, 0);
    pub const AMBER: Rgb = Rgb::new(100, 100, 0);
    pub const DARK_RED: Rgb = Rgb::new(100, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Temperature zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Zone {
    Safe,
    Warn,
    Critical,
}

impl Zone {
    /// Label shown under the reading
    pub const fn label(self) -> &'static str {
        match self {
            Zone::Safe => "Safe",
            Zone::Warn => "Warn",
            Zone::Critical => "Critical",
        }
    }

    /// Background colour for the zone
    pub const fn background(self) -> Rgb {
        match self {
            Zone::Safe => Rgb::DARK_GREEN,
            Zone::Warn => Rgb::AMBER,
            Zone::Critical => Rgb::DARK_RED,
        }
    }
}

/// Classify a reading in degrees Celsius
///
/// Total over `f32`: NaN and infinities are Critical.
pub fn classify(celsius: f32) -> Zone {
    if (SAFE_LOW_C..=SAFE_HIGH_C).contains(&celsius) {
        Zone::Safe
    } else if (WARN_LOW_C..=WARN_HIGH_C).contains(&celsius) {
        Zone::Warn
    } else {
        Zone::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(23.0), Zone::Safe);
        assert_eq!(classify(25.0), Zone::Safe);
        assert_eq!(classify(24.0), Zone::Safe);
        assert_eq!(classify(21.0), Zone::Warn);
        assert_eq!(classify(22.999), Zone::Warn);
        assert_eq!(classify(25.001), Zone::Warn);
        assert_eq!(classify(27.0), Zone::Warn);
        assert_eq!(classify(20.999), Zone::Critical);
        assert_eq!(classify(27.001), Zone::Critical);
    }

    #[test]
    fn test_classify_non_finite() {
        assert_eq!(classify(f32::NAN), Zone::Critical);
        assert_eq!(classify(f32::INFINITY), Zone::Critical);
        assert_eq!(classify(f32::NEG_INFINITY), Zone::Critical);
    }

    #[test]
    fn test_zone_colours() {
        assert_eq!(Zone::Safe.background(), Rgb::new(0, 100, 0));
        assert_eq!(Zone::Warn.background(), Rgb::new(100, 100, 0));
        assert_eq!(Zone::Critical.background(), Rgb::new(100, 0, 0));
        assert_eq!(Zone::Critical.label(), "Critical");
    }

    proptest! {
        #[test]
        fn prop_zones_partition_readings(t in -100.0f32..150.0) {
            let safe = (23.0..=25.0).contains(&t);
            let warn = (21.0..23.0).contains(&t) || (t > 25.0 && t <= 27.0);
            let expected = if safe {
                Zone::Safe
            } else if warn {
                Zone::Warn
            } else {
                Zone::Critical
            };
            prop_assert_eq!(classify(t), expected);
        }
    }
}
