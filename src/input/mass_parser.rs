use super::mass_errors::MassError;
use crate::models::mass::{Mass, MassUnit};
use log::debug;

/// Parses a free-text mass such as `"5 earths"` or `"2.5kilograms"`.
///
/// The line must begin with a decimal number (digits, optionally followed by
/// a `.` and more digits), then optional whitespace, then one of the unit
/// names in singular or plural form, in any case. Anything after a
/// recognised unit name is ignored, as is the trailing line terminator.
/// Leading whitespace is rejected.
pub fn parse_mass(input: &str) -> Result<Mass, MassError> {
    let line = input.trim_end();
    let invalid = || MassError::InvalidMassFormat(line.to_string());

    let (number, rest) = split_number(line).ok_or_else(invalid)?;
    let unit = match_unit(rest.trim_start()).ok_or_else(invalid)?;
    let value: f64 = number.parse()?;

    debug!("Parsed mass input {:?} as {} {}", line, value, unit);
    Mass::from_value(value, unit)
}

/// Converts a mass description straight to kilograms.
pub fn convert_mass_to_kg(input: &str) -> Result<f64, MassError> {
    parse_mass(input).map(|mass| mass.kg())
}

/// Splits off the leading `digits[.digits]` run.
fn split_number(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let integer_end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    if integer_end == 0 {
        return None;
    }

    let mut end = integer_end;
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        end += bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    }

    // A bare trailing dot ("5.") still names the integer
    let number = line[..end].trim_end_matches('.');
    Some((number, &line[end..]))
}

fn match_unit(rest: &str) -> Option<MassUnit> {
    let lowered = rest.to_ascii_lowercase();
    MassUnit::ALL
        .into_iter()
        .find(|unit| lowered.starts_with(unit.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case("1 earth", 5.972e24; "one earth")]
    #[test_case("2 suns", 3.978e30; "two suns")]
    #[test_case("1000 grams", 1.0; "grams to kilograms")]
    #[test_case("5 tons", 5000.0; "metric tons")]
    #[test_case("1 kilogram", 1.0; "identity")]
    #[test_case("2.5Kilograms", 2.5; "no whitespace mixed case")]
    #[test_case("3   EARTHS  \n", 3.0 * 5.972e24; "trailing whitespace and newline")]
    #[test_case("7. grams", 0.007; "trailing decimal point")]
    #[test_case("1 gram", 0.001; "singular gram")]
    #[test_case("4 tonnes", 4000.0; "text after unit is ignored")]
    fn test_convert_mass_to_kg(input: &str, expected: f64) {
        let kg = convert_mass_to_kg(input).unwrap();
        assert_relative_eq!(kg, expected, max_relative = 1e-12);
    }

    #[test_case("5"; "missing unit")]
    #[test_case("earths"; "missing number")]
    #[test_case("hello world"; "garbage text")]
    #[test_case(""; "empty line")]
    #[test_case("5 pounds"; "unknown unit")]
    #[test_case("-5 grams"; "negative sign")]
    #[test_case(".5 suns"; "leading decimal point")]
    #[test_case("5 5 earths"; "second number before unit")]
    #[test_case("  3 earths"; "leading whitespace")]
    fn test_malformed_input(input: &str) {
        let err = parse_mass(input).unwrap_err();
        assert!(
            matches!(err, MassError::InvalidMassFormat(_)),
            "unexpected error for {:?}: {}",
            input,
            err
        );
    }

    #[test]
    fn test_zero_mass_is_rejected() {
        assert!(matches!(
            parse_mass("0 kilograms"),
            Err(MassError::NonPhysicalMass(_))
        ));
    }

    #[test]
    fn test_overflowing_digits_are_rejected() {
        let input = format!("{} grams", "1".repeat(400));
        assert!(matches!(
            parse_mass(&input),
            Err(MassError::NonPhysicalMass(kg)) if kg.is_infinite()
        ));
    }

    #[test]
    fn test_split_number() {
        assert_eq!(split_number("12.50kg"), Some(("12.50", "kg")));
        assert_eq!(split_number("8 suns"), Some(("8", " suns")));
        assert_eq!(split_number("x8"), None);
    }
}
