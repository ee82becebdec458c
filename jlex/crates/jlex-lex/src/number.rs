//! Numeric literal helpers.
//!
//! Java allows underscores between the digits of a literal (`1_000`,
//! `0xFF_FF`, `0b1010_0101`) but never next to the radix prefix, a dot, an
//! exponent marker, a suffix or the end of the literal. The functions here
//! answer the per-character questions the number states ask.

/// Numeric base of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    /// Base 10
    Decimal,
    /// Base 16, `0x` prefix
    Hex,
    /// Base 2, `0b` prefix
    Binary,
}

impl Radix {
    /// Returns true if `ch` is a digit in this radix.
    ///
    /// ```
    /// use jlex_lex::number::Radix;
    ///
    /// assert!(Radix::Hex.contains('f'));
    /// assert!(!Radix::Binary.contains('2'));
    /// assert!(!Radix::Decimal.contains('a'));
    /// ```
    #[inline]
    pub fn contains(self, ch: char) -> bool {
        match self {
            Radix::Decimal => is_digit(ch),
            Radix::Hex => is_hex_or_binary_digit(ch, false),
            Radix::Binary => is_hex_or_binary_digit(ch, true),
        }
    }

    /// Maps the flag pair used by the number states to a radix.
    #[inline]
    pub fn from_flags(is_binary: bool, is_hex: bool) -> Self {
        if is_binary {
            Radix::Binary
        } else if is_hex {
            Radix::Hex
        } else {
            Radix::Decimal
        }
    }
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// `0`/`1` when `is_binary`, otherwise an ASCII hex digit.
#[inline]
pub fn is_hex_or_binary_digit(ch: char, is_binary: bool) -> bool {
    if is_binary {
        matches!(ch, '0' | '1')
    } else {
        ch.is_ascii_hexdigit()
    }
}

/// `f F d D`, plus `l L` when `supports_long`.
#[inline]
pub fn is_number_type_suffix(ch: char, supports_long: bool) -> bool {
    matches!(ch, 'f' | 'F' | 'd' | 'D') || (supports_long && matches!(ch, 'l' | 'L'))
}

/// A digit, or a `.` immediately followed by a digit.
///
/// ```
/// use jlex_lex::number::is_number_starter;
///
/// assert!(is_number_starter('7', None));
/// assert!(is_number_starter('.', Some('5')));
/// assert!(!is_number_starter('.', Some('x')));
/// assert!(!is_number_starter('.', None));
/// ```
#[inline]
pub fn is_number_starter(ch: char, next: Option<char>) -> bool {
    is_digit(ch) || (ch == '.' && next.is_some_and(is_digit))
}

/// Radix digit check driven by the same flag pair as the number states.
#[inline]
pub fn is_in_radix_range(ch: char, is_binary: bool, is_hex: bool) -> bool {
    Radix::from_flags(is_binary, is_hex).contains(ch)
}

/// Returns true if `next` may follow the `x`/`b` of a radix prefix.
///
/// Only a decimal digit outside the radix rejects the prefix, as in `0b2`.
/// Anything else keeps it; a literal left without digits is then UNKNOWN.
///
/// ```
/// use jlex_lex::number::{accepts_radix_prefix, Radix};
///
/// assert!(accepts_radix_prefix(Some('1'), Radix::Binary));
/// assert!(!accepts_radix_prefix(Some('2'), Radix::Binary));
/// assert!(accepts_radix_prefix(Some('g'), Radix::Hex));
/// ```
#[inline]
pub fn accepts_radix_prefix(next: Option<char>, radix: Radix) -> bool {
    !next.is_some_and(|ch| is_digit(ch) && !radix.contains(ch))
}

/// Extracts an underscore group from a numeric literal.
///
/// `rest` starts at an underscore and `prev` is the character just before
/// it. The run is valid when `prev` is a digit of `radix` and the
/// underscores are followed by another digit of `radix`. On success the
/// underscores plus that terminating digit are returned, e.g. `"__2"`;
/// end of input or any other character rejects the whole run.
///
/// # Examples
///
/// ```
/// use jlex_lex::number::{underscore_run, Radix};
///
/// assert_eq!(underscore_run(Some('1'), "___2;", Radix::Decimal), Some("___2"));
/// assert_eq!(underscore_run(Some('1'), "__", Radix::Decimal), None);
/// assert_eq!(underscore_run(Some('x'), "_1", Radix::Hex), None);
/// ```
pub fn underscore_run(prev: Option<char>, rest: &str, radix: Radix) -> Option<&str> {
    if !rest.starts_with('_') || !prev.is_some_and(|ch| radix.contains(ch)) {
        return None;
    }
    let underscores = rest.len() - rest.trim_start_matches('_').len();
    let digit = rest[underscores..].chars().next()?;
    radix
        .contains(digit)
        .then(|| &rest[..underscores + digit.len_utf8()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digit() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(!is_digit('٣'));
    }

    #[test]
    fn test_hex_or_binary_digit() {
        assert!(is_hex_or_binary_digit('1', true));
        assert!(!is_hex_or_binary_digit('2', true));
        assert!(is_hex_or_binary_digit('A', false));
        assert!(is_hex_or_binary_digit('f', false));
        assert!(!is_hex_or_binary_digit('g', false));
    }

    #[test]
    fn test_type_suffix() {
        assert!(is_number_type_suffix('f', false));
        assert!(is_number_type_suffix('D', false));
        assert!(!is_number_type_suffix('L', false));
        assert!(is_number_type_suffix('L', true));
        assert!(!is_number_type_suffix('x', true));
    }

    #[test]
    fn test_radix_flags() {
        assert_eq!(Radix::from_flags(true, false), Radix::Binary);
        assert_eq!(Radix::from_flags(false, true), Radix::Hex);
        assert_eq!(Radix::from_flags(false, false), Radix::Decimal);
        assert!(is_in_radix_range('b', false, true));
        assert!(!is_in_radix_range('b', false, false));
    }

    #[test]
    fn test_radix_prefix() {
        assert!(accepts_radix_prefix(Some('1'), Radix::Binary));
        assert!(accepts_radix_prefix(Some(';'), Radix::Binary));
        assert!(accepts_radix_prefix(None, Radix::Hex));
        assert!(!accepts_radix_prefix(Some('2'), Radix::Binary));
        assert!(!accepts_radix_prefix(Some('9'), Radix::Binary));
        assert!(accepts_radix_prefix(Some('9'), Radix::Hex));
        assert!(accepts_radix_prefix(Some('g'), Radix::Hex));
        assert!(accepts_radix_prefix(Some('_'), Radix::Hex));
        assert!(accepts_radix_prefix(Some('L'), Radix::Binary));
    }

    #[test]
    fn test_underscore_run_valid() {
        assert_eq!(underscore_run(Some('1'), "_0", Radix::Decimal), Some("_0"));
        assert_eq!(underscore_run(Some('F'), "__a", Radix::Hex), Some("__a"));
        assert_eq!(underscore_run(Some('0'), "_1_0", Radix::Binary), Some("_1"));
    }

    #[test]
    fn test_underscore_run_bad_neighbours() {
        assert_eq!(underscore_run(None, "_1", Radix::Decimal), None);
        assert_eq!(underscore_run(Some('.'), "_1", Radix::Decimal), None);
        assert_eq!(underscore_run(Some('1'), "_.", Radix::Decimal), None);
        assert_eq!(underscore_run(Some('1'), "_2", Radix::Binary), None);
        assert_eq!(underscore_run(Some('1'), "_a", Radix::Decimal), None);
    }

    #[test]
    fn test_underscore_run_requires_underscore() {
        assert_eq!(underscore_run(Some('1'), "1", Radix::Decimal), None);
        assert_eq!(underscore_run(Some('1'), "", Radix::Decimal), None);
    }
}
