use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use models::TierEntry;

use crate::error::ParseError;

// Label text (letters and spaces, optionally ending in a division number such
// as "Iron 1"), a space, then the share as a decimal directly followed by '%'.
static TIER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tier>[\p{L}\s]*\d*)\s(?P<share>\d+(?:\.\d+)?)%").unwrap()
});

/// Parse `<label> <number>%` lines into tier entries, accumulating the
/// cumulative percentile in input order.
///
/// The first line that does not match fails the whole batch.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<TierEntry>, ParseError> {
    let mut cumulative = Decimal::ZERO;
    let mut entries = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let parse_error = || ParseError {
            line_number: idx + 1,
            line: line.to_string(),
        };
        let (tier, share) = parse_line(line).ok_or_else(parse_error)?;
        // a share too large to sum is as unusable as a malformed one
        cumulative = cumulative.checked_add(share).ok_or_else(parse_error)?;
        entries.push(TierEntry::new(tier, share, cumulative));
    }

    Ok(entries)
}

fn parse_line(line: &str) -> Option<(&str, Decimal)> {
    let caps = TIER_LINE.captures(line)?;
    let tier = caps.name("tier")?.as_str().trim();
    if tier.is_empty() {
        return None;
    }
    let share = Decimal::from_str(caps.name("share")?.as_str()).ok()?;
    Some((tier, share))
}
