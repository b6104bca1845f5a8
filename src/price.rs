// src/price.rs
//
// Free-text price → number.
//
// Policy: the first numeric token wins. A token is a digit run where a
// comma followed by exactly three digits is a thousands separator, with an
// optional `.fraction`. Everything around it (currency signs, codes) is
// ignored.
//
//   "$25.00"      → 25.0
//   "25 MXN"      → 25.0
//   "$1,250 MXN"  → 1250.0
//   "1,25 €"      → 1.0   (comma not followed by three digits ends the token)
//   "1,2345"      → 1.0   (nor by four)
//   "consultar"   → None

use std::sync::LazyLock;

use regex::Regex;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII only: other scripts' digits don't parse as f64
    Regex::new(r"[0-9]+").unwrap()
});

/// `,ddd` right at the start of `rest`, not followed by a fourth digit.
fn thousands_group(rest: &str) -> Option<&str> {
    let group = rest.strip_prefix(',')?;
    let run = group.bytes().take_while(u8::is_ascii_digit).count();
    (run == 3).then(|| &group[..3])
}

/// First numeric token with separators removed, e.g. "1250.5".
fn price_token(raw: &str) -> Option<String> {
    let lead = DIGITS.find(raw)?;
    let mut token = s!(lead.as_str());
    let mut rest = &raw[lead.end()..];

    if lead.len() <= 3 {
        while let Some(group) = thousands_group(rest) {
            token.push_str(group);
            rest = &rest[4..];
        }
    }

    if let Some(frac) = rest.strip_prefix('.') {
        if let Some(m) = DIGITS.find(frac).filter(|m| m.start() == 0) {
            token.push('.');
            token.push_str(m.as_str());
        }
    }
    Some(token)
}

/// Extract the comparable value of a raw price cell. `None` when the text
/// has no digits at all.
pub fn parse_price(raw: &str) -> Option<f64> {
    price_token(raw)?.parse::<f64>().ok()
}

/// Largest defined price; `None` if no value is defined.
pub fn max_price<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values.into_iter().flatten().fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}
