//! Names and numerals of the Republican calendar.

/// Canonical month names, Vendémiaire first. The 13th "month" holds the
/// complementary days.
pub const MONTH_NAMES: [&str; 13] = [
    "Vendémiaire",
    "Brumaire",
    "Frimaire",
    "Nivôse",
    "Pluviôse",
    "Ventôse",
    "Germinal",
    "Floréal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
    "Sansculottides",
];

/// Names of the complementary-day festivals, in order. The sixth is only
/// celebrated in sextile years.
pub const SPECIAL_DAY_NAMES: [&str; 6] = [
    "Fête de la Vertu",
    "Fête du Génie",
    "Fête du Travail",
    "Fête de l'Opinion",
    "Fête des Récompenses",
    "Fête de la Révolution",
];

/// Names of the ten days of a décade.
pub const DECADE_DAY_NAMES: [&str; 10] = [
    "Primidi", "Duodi", "Tridi", "Quartidi", "Quintidi", "Sextidi", "Septidi", "Octidi", "Nonidi",
    "Décadi",
];

const ROMAN: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Writes `num` in Roman numerals. Thousands beyond 3999 repeat `M`.
///
/// # Example
///
/// ```
/// use respublikana::republican::fmt;
///
/// assert_eq!("XIV", fmt::roman(14));
/// assert_eq!("CCXXIX", fmt::roman(229));
/// ```
///
/// # Panics
///
/// Panics if `num` is 0.
pub fn roman(mut num: u32) -> String {
    assert!(num > 0, "no Roman numeral for 0");
    let mut rt = String::new();
    for &(value, digits) in &ROMAN {
        while num >= value {
            rt += digits;
            num -= value;
        }
    }
    rt
}

/// Reads a Roman numeral written the way [`roman`] writes it (upper or lower
/// case). Returns `None` for anything else.
///
/// ```
/// use respublikana::republican::fmt;
///
/// assert_eq!(Some(1804), fmt::parse_roman("MDCCCIV"));
/// assert_eq!(Some(3), fmt::parse_roman("iii"));
/// assert_eq!(None, fmt::parse_roman("IIII"));
/// ```
pub fn parse_roman(s: &str) -> Option<u32> {
    let upper = s.to_ascii_uppercase();
    let mut rest = upper.as_str();
    let mut num = 0u32;
    for &(value, digits) in &ROMAN {
        while let Some(tail) = rest.strip_prefix(digits) {
            num = num.checked_add(value)?;
            rest = tail;
        }
    }
    (rest.is_empty() && num > 0 && roman(num) == upper).then_some(num)
}

/// Year in the traditional form, e.g. `An XII`.
///
/// ```
/// use respublikana::republican::fmt;
///
/// assert_eq!("An III", fmt::year(3));
/// ```
///
/// # Panics
///
/// Panics if `year` is not positive.
pub fn year(year: i32) -> String {
    let num = u32::try_from(year).unwrap_or(0);
    format!("An {}", roman(num))
}

/// Name of the `day`-th day of a décade (`1..=10`).
///
/// ```
/// use respublikana::republican::fmt;
///
/// assert_eq!("Primidi", fmt::decade_day(1));
/// assert_eq!("Décadi", fmt::decade_day(10));
/// ```
///
/// # Panics
///
/// Panics if `day` is not in `1..=10`.
pub fn decade_day(day: u32) -> &'static str {
    match day {
        1..=10 => DECADE_DAY_NAMES[day as usize - 1],
        _ => panic!("day {} not in 1..=10", day),
    }
}

/// Lowercases and strips the accents used in month names, for lenient
/// matching.
pub(crate) fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'é' | 'è' | 'ê' => 'e',
            'ô' => 'o',
            'â' | 'à' => 'a',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman() {
        for (std, num) in [
            ("I", 1),
            ("IV", 4),
            ("IX", 9),
            ("XX", 20),
            ("XCIX", 99),
            ("CD", 400),
            ("MMMCMXCIX", 3999),
            ("MMMM", 4000),
        ] {
            assert_eq!(std, roman(num));
            assert_eq!(Some(num), parse_roman(std));
        }
    }

    #[test]
    fn test_parse_roman_rejects() {
        for s in ["", "ABC", "VV", "IIII", "IC", "XM"] {
            assert_eq!(None, parse_roman(s), "{s:?}");
        }
    }

    #[test]
    fn test_year() {
        assert_eq!("An I", year(1));
        assert_eq!("An CCXXXIV", year(234));
    }

    #[test]
    fn test_fold() {
        assert_eq!("vendemiaire", fold("Vendémiaire"));
        assert_eq!("nivose", fold("NIVÔSE"));
        assert_eq!("fete de l'opinion", fold("Fête de l'Opinion"));
    }
}
