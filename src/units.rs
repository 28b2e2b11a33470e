//! Unit Conversion Helpers
//!
//! Display formatting for millimetres/inches and grams/ounces/pounds.

use crate::models::Units;

const MM_PER_IN: f64 = 25.4;
const G_PER_OZ: f64 = 28.3495;
const G_PER_LB: f64 = 453.592;

pub fn mm_to_in(mm: f64) -> f64 {
    mm / MM_PER_IN
}

/// Item weight: grams/kilograms in metric, ounces under 2 lb in imperial.
pub fn format_weight(grams: f64, units: Units) -> String {
    match units {
        Units::Metric => {
            if grams >= 1000.0 {
                format!("{:.1} kg", grams / 1000.0)
            } else {
                format!("{grams:.0} g")
            }
        }
        Units::Imperial => {
            let oz = grams / G_PER_OZ;
            if oz < 32.0 {
                format!("{oz:.1} oz")
            } else {
                format!("{:.1} lb", oz / 16.0)
            }
        }
    }
}

/// Total board weight readout: always kilograms in metric; ounces below
/// one pound in imperial, pounds otherwise.
pub fn format_total_weight(grams: f64, units: Units) -> String {
    match units {
        Units::Metric => format!("{:.2} kg", grams / 1000.0),
        Units::Imperial => {
            let lb = grams / G_PER_LB;
            if lb < 1.0 {
                format!("{:.1} oz", grams / G_PER_OZ)
            } else {
                format!("{lb:.1} lb")
            }
        }
    }
}

/// "W x D" with the unit suffix for the active system.
pub fn format_dimensions(width_mm: f64, depth_mm: f64, units: Units) -> String {
    match units {
        Units::Metric => format!("{width_mm:.0} x {depth_mm:.0} mm"),
        Units::Imperial => format!(
            "{:.2} x {:.2} in",
            mm_to_in(width_mm),
            mm_to_in(depth_mm)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_weight_switches_to_kilograms() {
        assert_eq!(format_weight(450.0, Units::Metric), "450 g");
        assert_eq!(format_weight(1500.0, Units::Metric), "1.5 kg");
    }

    #[test]
    fn imperial_weight_switches_to_pounds() {
        assert_eq!(format_weight(283.495, Units::Imperial), "10.0 oz");
        assert_eq!(format_weight(1360.776, Units::Imperial), "3.0 lb");
    }

    #[test]
    fn total_weight_readout() {
        assert_eq!(format_total_weight(2500.0, Units::Metric), "2.50 kg");
        assert_eq!(format_total_weight(226.796, Units::Imperial), "8.0 oz");
        assert_eq!(format_total_weight(907.184, Units::Imperial), "2.0 lb");
    }

    #[test]
    fn dimensions_formatting() {
        assert_eq!(format_dimensions(70.0, 120.0, Units::Metric), "70 x 120 mm");
        assert_eq!(
            format_dimensions(25.4, 50.8, Units::Imperial),
            "1.00 x 2.00 in"
        );
    }
}
