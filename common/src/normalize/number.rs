use std::ops::Mul;
use std::str::FromStr;

/// Numeric kinds the site abbreviates with a trailing `k`/`m`.
pub trait Abbreviated: FromStr + Mul<Output = Self> + Copy {
    const THOUSAND: Self;
    const MILLION: Self;
}

impl Abbreviated for f64 {
    const THOUSAND: Self = 1_000.0;
    const MILLION: Self = 1_000_000.0;
}

impl Abbreviated for u64 {
    const THOUSAND: Self = 1_000;
    const MILLION: Self = 1_000_000;
}

/// Parses `"1.2k"`, `"3m"` or plain `"42"`. Only the abbreviated path
/// strips the suffix; anything else is handed to the parser untouched.
pub fn parse_abbreviated<T: Abbreviated>(raw: &str) -> Result<T, T::Err> {
    let mut chars = raw.char_indices();
    let multiplier = match chars.next_back() {
        Some((idx, c)) if c.eq_ignore_ascii_case(&'k') => Some((idx, T::THOUSAND)),
        Some((idx, c)) if c.eq_ignore_ascii_case(&'m') => Some((idx, T::MILLION)),
        _ => None,
    };
    match multiplier {
        Some((idx, factor)) => Ok(raw[..idx].parse::<T>()? * factor),
        None => raw.parse::<T>(),
    }
}
