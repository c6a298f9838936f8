//! Duration literals such as `"3h00m"`, `"50m"` or `"1.5h"`.
//!
//! A literal is an optional sign followed by one or more `<number><unit>`
//! pairs. Numbers may carry a decimal fraction. Recognized units are `h`, `m`,
//! `s`, `ms`, `us` (also `µs` and `μs`) and `ns`. The bare literal `0` needs no
//! unit. Parsing is signed so callers can tell a negative span apart from a
//! syntax error.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

static COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]*))?(?P<unit>[^0-9.]*)")
        .expect("duration component pattern is valid")
});

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DurationSyntaxError {
    #[error("empty duration literal")]
    Empty,
    #[error("expected a number at {rest:?}")]
    MissingNumber { rest: String },
    #[error("missing unit after {number:?}")]
    MissingUnit { number: String },
    #[error("unknown unit {unit:?}")]
    UnknownUnit { unit: String },
    #[error("duration is too large")]
    Overflow,
}

/// A time span that may be negative, as written in a duration literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedDuration {
    nanos: i64,
}

impl SignedDuration {
    pub const ZERO: SignedDuration = SignedDuration { nanos: 0 };

    pub fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    pub fn is_positive(&self) -> bool {
        self.nanos > 0
    }

    /// The span as a [`Duration`], or `None` when it is zero or negative.
    pub fn to_positive(&self) -> Option<Duration> {
        self.is_positive()
            .then(|| Duration::from_nanos(self.nanos.unsigned_abs()))
    }
}

impl fmt::Display for SignedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = Duration::from_nanos(self.nanos.unsigned_abs());
        if self.nanos < 0 {
            write!(f, "-{magnitude:?}")
        } else {
            write!(f, "{magnitude:?}")
        }
    }
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn parse_integer(digits: &str) -> Result<u64, DurationSyntaxError> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .ok_or(DurationSyntaxError::Overflow)
    })
}

/// Value and scale of a fraction's digits. Digits past u64 precision are dropped.
fn parse_fraction(digits: &str) -> (u64, f64) {
    let mut value = 0u64;
    let mut scale = 1.0f64;
    for b in digits.bytes() {
        let Some(next) = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
        else {
            break;
        };
        value = next;
        scale *= 10.0;
    }
    (value, scale)
}

/// Parse a duration literal into a signed span.
pub fn parse_duration(text: &str) -> Result<SignedDuration, DurationSyntaxError> {
    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if rest == "0" {
        return Ok(SignedDuration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationSyntaxError::Empty);
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let caps = COMPONENT
            .captures(rest)
            .ok_or_else(|| DurationSyntaxError::MissingNumber {
                rest: rest.to_string(),
            })?;
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let int = caps.name("int").map_or("", |m| m.as_str());
        let frac = caps.name("frac").map_or("", |m| m.as_str());
        let unit = caps.name("unit").map_or("", |m| m.as_str());

        if int.is_empty() && frac.is_empty() {
            return Err(DurationSyntaxError::MissingNumber {
                rest: rest.to_string(),
            });
        }
        if unit.is_empty() {
            return Err(DurationSyntaxError::MissingUnit {
                number: whole.to_string(),
            });
        }
        let scale_nanos = unit_nanos(unit).ok_or_else(|| DurationSyntaxError::UnknownUnit {
            unit: unit.to_string(),
        })?;

        let mut component = parse_integer(int)?
            .checked_mul(scale_nanos)
            .ok_or(DurationSyntaxError::Overflow)?;
        if !frac.is_empty() {
            let (value, scale) = parse_fraction(frac);
            let extra = (value as f64 * (scale_nanos as f64 / scale)) as u64;
            component = component
                .checked_add(extra)
                .ok_or(DurationSyntaxError::Overflow)?;
        }
        total = total
            .checked_add(component)
            .ok_or(DurationSyntaxError::Overflow)?;

        rest = &rest[whole.len()..];
    }

    let magnitude = i64::try_from(total).map_err(|_| DurationSyntaxError::Overflow)?;
    Ok(SignedDuration::from_nanos(if negative {
        -magnitude
    } else {
        magnitude
    }))
}
