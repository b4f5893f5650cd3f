//! Minor-unit currency formatting.

/// Render `minor_units` (pence, cents) as `<symbol><whole>.<frac>`.
///
/// Integer arithmetic keeps the two decimal places exact.
#[must_use]
pub fn format_minor_units(symbol: &str, minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    let whole = abs / 100;
    let frac = abs % 100;
    format!("{sign}{symbol}{whole}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_renders_two_decimals() {
        assert_eq!(format_minor_units("£", 350), "£3.50");
        assert_eq!(format_minor_units("£", 1500), "£15.00");
        assert_eq!(format_minor_units("£", 0), "£0.00");
        assert_eq!(format_minor_units("£", 7), "£0.07");
    }

    #[test]
    fn handles_negative_and_extreme_values() {
        assert_eq!(format_minor_units("$", -99), "-$0.99");
        assert_eq!(format_minor_units("£", i64::MIN), "-£92233720368547758.08");
    }
}
