//! Site navigation badge counts.

/// What to do with a navigation badge after the basket changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeUpdate {
    /// Nothing left to show; hide the badge's container.
    Hide,
    /// Show this count.
    Show(i64),
}

/// Leading-integer parse of a data attribute, 0 when there is none.
#[must_use]
pub fn parse_count(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim) else {
        return 0;
    };
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |value| sign * value)
}

/// Badge state for `remaining` basket items plus other pending items.
#[must_use]
pub fn badge_update(remaining: usize, other_count: Option<&str>) -> BadgeUpdate {
    let remaining = i64::try_from(remaining).unwrap_or(i64::MAX);
    let count = remaining.saturating_add(parse_count(other_count));
    if count <= 0 {
        BadgeUpdate::Hide
    } else {
        BadgeUpdate::Show(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_remaining_plus_other() {
        assert_eq!(badge_update(2, Some("3")), BadgeUpdate::Show(5));
        assert_eq!(badge_update(1, None), BadgeUpdate::Show(1));
    }

    #[test]
    fn hides_when_nothing_remains() {
        assert_eq!(badge_update(0, None), BadgeUpdate::Hide);
        assert_eq!(badge_update(0, Some("0")), BadgeUpdate::Hide);
        assert_eq!(badge_update(1, Some("-4")), BadgeUpdate::Hide);
    }

    #[test]
    fn parse_count_is_lenient() {
        assert_eq!(parse_count(Some(" 12 pending")), 12);
        assert_eq!(parse_count(Some("abc")), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(Some("+7")), 7);
        assert_eq!(parse_count(None), 0);
    }
}
