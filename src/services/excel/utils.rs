use calamine::{Data, Range};
use chrono::{NaiveDate, NaiveDateTime};

/// Display text of a cell; empty cells render as the empty string.
pub fn cell_display(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// 1-based column index to a spreadsheet letter name (1 -> A, 27 -> AA).
pub fn column_letter(index: usize) -> String {
    let mut name = String::new();
    let mut n = index;

    while n > 0 {
        let remainder = (n - 1) % 26;
        name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    if name.is_empty() {
        name.push('A');
    }

    name
}

/// `A1:AN54`-style extent of a worksheet range, `None` when it holds no cells.
pub fn range_dimensions(range: &Range<Data>) -> Option<String> {
    let (start_row, start_col) = range.start()?;
    let (end_row, end_col) = range.end()?;
    Some(format!(
        "{}{}:{}{}",
        column_letter(start_col as usize + 1),
        start_row + 1,
        column_letter(end_col as usize + 1),
        end_row + 1
    ))
}

/// Leading day-of-month of a free-text kickoff cell such as `"14.03 18:30"`.
/// The text is split on `.` and then on whitespace; the first token must
/// parse as an integer. Anything else yields `None` and the row is simply
/// not counted - malformed dates are a data-quality fact, not an error.
///
/// Only the day is compared anywhere, so day 14 of any month matches a
/// caller whose current day is 14. Known collision, kept as-is.
pub fn leading_day_of_month(raw: &str) -> Option<u32> {
    let before_dot = raw.split('.').next().unwrap_or("");
    let token = before_dot.split_whitespace().next()?;
    token.parse::<u32>().ok()
}

/// Whether a kickoff cell falls on the given day-of-month.
pub fn matches_day(raw: &str, day: u32) -> bool {
    leading_day_of_month(raw) == Some(day)
}

/// `part / total * 100` rounded to one decimal place; 0.0 when there is
/// nothing to divide by.
pub fn round_pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = part as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Whether a string cell looks like a date under the common formats the
/// scraper emits.
pub fn is_date_string(s: &str) -> bool {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d", "%d-%m-%Y"];
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%d/%m/%Y %H:%M:%S"];

    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(s, format).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(s, format).is_ok())
}

/// Classify a column from its non-empty cells: at least 80% of one kind wins,
/// mixed content falls back to "string".
pub fn detect_column_type(values: &[Data]) -> &'static str {
    let mut numeric = 0usize;
    let mut date = 0usize;
    let mut boolean = 0usize;
    let mut total = 0usize;

    for value in values.iter().filter(|v| !matches!(v, Data::Empty)) {
        total += 1;
        match value {
            Data::Float(_) | Data::Int(_) => numeric += 1,
            Data::DateTime(_) | Data::DateTimeIso(_) => date += 1,
            Data::String(s) if is_date_string(s) => date += 1,
            Data::Bool(_) => boolean += 1,
            _ => {}
        }
    }

    if total == 0 {
        return "empty";
    }

    let threshold = total as f64 * 0.8;
    if numeric as f64 >= threshold {
        "numeric"
    } else if date as f64 >= threshold {
        "date"
    } else if boolean as f64 >= threshold {
        "boolean"
    } else {
        "string"
    }
}

pub fn update_min_max(min_max: &mut (Option<String>, Option<String>), value: &str) {
    let (min, max) = min_max;
    if min.as_deref().map_or(true, |m| value < m) {
        *min = Some(value.to_string());
    }
    if max.as_deref().map_or(true, |m| value > m) {
        *max = Some(value.to_string());
    }
}

pub fn merge_min_max(
    a: (Option<String>, Option<String>),
    b: (Option<String>, Option<String>),
) -> (Option<String>, Option<String>) {
    fn pick(x: Option<String>, y: Option<String>, keep_left: fn(&str, &str) -> bool) -> Option<String> {
        match (x, y) {
            (None, other) | (other, None) => other,
            (Some(x), Some(y)) => Some(if keep_left(&x, &y) { x } else { y }),
        }
    }

    (
        pick(a.0, b.0, |x, y| x <= y),
        pick(a.1, b.1, |x, y| x >= y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn day_heuristic_counts_matching_day() {
        assert!(matches_day("5.03", 5));
        assert!(matches_day("5.03 18:30", 5));
        assert!(matches_day("14.03 18:30", 14));
    }

    #[test]
    fn day_heuristic_rejects_other_days() {
        assert!(!matches_day("15.03", 5));
        assert!(!matches_day("5.03", 15));
    }

    #[test]
    fn day_heuristic_swallows_malformed_input() {
        assert_eq!(leading_day_of_month(""), None);
        assert_eq!(leading_day_of_month("abc"), None);
        assert_eq!(leading_day_of_month("..:.."), None);
        assert!(!matches_day("", 5));
        assert!(!matches_day("abc", 5));
    }

    #[test]
    fn day_heuristic_reads_numeric_display_text() {
        // A numeric cell like 14.03 renders as "14.03" and still matches.
        assert_eq!(leading_day_of_month("14.03"), Some(14));
    }

    #[test]
    fn column_letters_roll_over_at_z() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(40), "AN");
    }

    #[test]
    fn percentages_round_to_one_decimal() {
        assert_eq!(round_pct(1, 3), 33.3);
        assert_eq!(round_pct(2, 3), 66.7);
        assert_eq!(round_pct(0, 53), 0.0);
        assert_eq!(round_pct(53, 53), 100.0);
        assert_eq!(round_pct(0, 0), 0.0);
    }

    #[test]
    fn date_strings_are_recognized() {
        assert!(is_date_string("2026-03-14"));
        assert!(is_date_string("14/03/2026"));
        assert!(is_date_string("2026-03-14 18:30:00"));
        assert!(!is_date_string("Arsenal"));
        assert!(!is_date_string("14.03 18:30"));
    }

    #[test]
    fn min_max_merge_prefers_extremes() {
        let mut left = (None, None);
        update_min_max(&mut left, "b");
        update_min_max(&mut left, "a");
        let mut right = (None, None);
        update_min_max(&mut right, "c");

        let merged = merge_min_max(left, right);
        assert_eq!(merged, (Some("a".to_string()), Some("c".to_string())));
    }
}
