//! ISO 8601 duration scalar.

use std::fmt;
use std::str::FromStr;

use crate::error::SerializationError;

/// An ISO 8601 duration (`P3DT4H30M`, `-PT0.5S`, ...).
///
/// Calendar components are kept separate rather than normalized into
/// seconds: `P1M` is not a fixed number of seconds, so the wire text must
/// round-trip component-for-component.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl IsoDuration {
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0.0
    }
}

impl FromStr for IsoDuration {
    type Err = SerializationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let err = || SerializationError::InvalidDuration(text.to_owned());
        let bytes = text.as_bytes();
        let mut pos = 0;

        let negative = bytes.first() == Some(&b'-');
        if negative {
            pos += 1;
        }
        if bytes.get(pos) != Some(&b'P') {
            return Err(err());
        }
        pos += 1;

        let mut duration = IsoDuration {
            negative,
            ..IsoDuration::default()
        };
        let mut in_time = false;
        let mut saw_component = false;

        while pos < bytes.len() {
            if bytes[pos] == b'T' {
                if in_time {
                    return Err(err());
                }
                in_time = true;
                pos += 1;
                continue;
            }

            let start = pos;
            while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
                pos += 1;
            }
            if start == pos || pos == bytes.len() {
                return Err(err());
            }
            let number = &text[start..pos];
            let designator = bytes[pos];
            pos += 1;
            saw_component = true;

            let whole = || number.parse::<u32>().map_err(|_| err());
            match (in_time, designator) {
                (false, b'Y') => duration.years = whole()?,
                (false, b'M') => duration.months = whole()?,
                (false, b'W') => duration.weeks = whole()?,
                (false, b'D') => duration.days = whole()?,
                (true, b'H') => duration.hours = whole()?,
                (true, b'M') => duration.minutes = whole()?,
                (true, b'S') => {
                    duration.seconds = number.parse::<f64>().map_err(|_| err())?;
                }
                _ => return Err(err()),
            }
        }

        // bare "P" or "PT" carries no components
        if !saw_component {
            return Err(err());
        }
        Ok(duration)
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.weeks > 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds != 0.0 {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0.0 {
                if self.seconds == self.seconds.trunc() {
                    write!(f, "{}S", self.seconds as u64)?;
                } else {
                    write!(f, "{}S", self.seconds)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display_roundtrip_matrix() {
        let cases = [
            "P1Y",
            "P2M",
            "P3W",
            "P4D",
            "PT5H",
            "PT6M",
            "PT7S",
            "P1Y2M3D",
            "P3DT4H30M",
            "PT1H30M",
            "PT0.5S",
            "-P1D",
            "-PT15M",
            "PT0S",
        ];
        for case in cases {
            let parsed: IsoDuration = case.parse().expect(case);
            assert_eq!(parsed.to_string(), case, "roundtrip of {case}");
        }
    }

    #[test]
    fn parse_components() {
        let parsed: IsoDuration = "P1Y2M3W4DT5H6M7.25S".parse().unwrap();
        assert_eq!(parsed.years, 1);
        assert_eq!(parsed.months, 2);
        assert_eq!(parsed.weeks, 3);
        assert_eq!(parsed.days, 4);
        assert_eq!(parsed.hours, 5);
        assert_eq!(parsed.minutes, 6);
        assert_eq!(parsed.seconds, 7.25);
        assert!(!parsed.negative);
    }

    #[test]
    fn month_designator_depends_on_time_marker() {
        let months: IsoDuration = "P2M".parse().unwrap();
        assert_eq!(months.months, 2);
        assert_eq!(months.minutes, 0);
        let minutes: IsoDuration = "PT2M".parse().unwrap();
        assert_eq!(minutes.months, 0);
        assert_eq!(minutes.minutes, 2);
    }

    #[test]
    fn rejects_malformed_text() {
        for case in ["", "P", "PT", "1Y", "P1", "P1H", "PTS", "P-1D"] {
            assert!(
                case.parse::<IsoDuration>().is_err(),
                "expected `{case}` to be rejected"
            );
        }
    }
}
