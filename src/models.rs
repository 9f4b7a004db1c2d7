//! Static description of the prediction workbook layout.
//!
//! The workbook is a positional contract: a fixed set of 1-based column
//! indices carry the prediction fields, everything else is scraper noise.
//! Columns outside the table are unmapped and must be skipped by reporting
//! code, never treated as an error.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// 1-based column holding the kickoff date/time text.
pub const KICKOFF_COLUMN: usize = 5;

/// Columns shown in the per-match sample listing.
pub const KEY_SAMPLE_COLUMNS: &[usize] = &[1, 2, 3, 4, 5, 6, 7, 8, 18, 22, 24, 34, 38];

/// Probability columns checked for missing values.
pub const QUALITY_COLUMNS: &[usize] = &[6, 7, 8, 18, 22, 34];

/// One row of the column-to-field table. `market` is the bookmaker market
/// code for probability columns; identity columns carry none.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub column: usize,
    pub field: &'static str,
    pub market: Option<&'static str>,
}

pub const PREDICTION_FIELDS: &[FieldSpec] = &[
    FieldSpec { column: 2, field: "HomeTeam", market: None },
    FieldSpec { column: 3, field: "AwayTeam", market: None },
    FieldSpec { column: 4, field: "League", market: None },
    FieldSpec { column: 5, field: "KickoffDateTime", market: None },
    FieldSpec { column: 6, field: "HomeWin", market: Some("1x2_h") },
    FieldSpec { column: 7, field: "Draw", market: Some("1x2_d") },
    FieldSpec { column: 8, field: "AwayWin", market: Some("1x2_a") },
    FieldSpec { column: 18, field: "OverTwoGoals", market: Some("o_2.5") },
    FieldSpec { column: 22, field: "OverThreeGoals", market: Some("o_3") },
    FieldSpec { column: 24, field: "OverFourGoals", market: Some("o_4") },
    FieldSpec { column: 34, field: "UnderTwoGoals", market: Some("u_2.5") },
    FieldSpec { column: 38, field: "UnderThreeGoals", market: Some("u_3") },
];

static FIELD_BY_COLUMN: Lazy<BTreeMap<usize, &'static FieldSpec>> =
    Lazy::new(|| PREDICTION_FIELDS.iter().map(|spec| (spec.column, spec)).collect());

/// Look up the semantic field behind a 1-based column index.
pub fn field_for_column(column: usize) -> Option<&'static FieldSpec> {
    FIELD_BY_COLUMN.get(&column).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mapped_columns_return_their_field() {
        assert_eq!(field_for_column(2).unwrap().field, "HomeTeam");
        assert_eq!(field_for_column(8).unwrap().field, "AwayWin");
        assert_eq!(field_for_column(38).unwrap().field, "UnderThreeGoals");
        assert_eq!(field_for_column(18).unwrap().market, Some("o_2.5"));
    }

    #[test]
    fn unmapped_columns_are_none_not_errors() {
        assert!(field_for_column(0).is_none());
        assert!(field_for_column(1).is_none());
        assert!(field_for_column(9).is_none());
        assert!(field_for_column(999).is_none());
    }

    #[test]
    fn table_is_keyed_uniquely_by_column() {
        assert_eq!(FIELD_BY_COLUMN.len(), PREDICTION_FIELDS.len());
    }
}
