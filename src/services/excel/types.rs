use smallvec::SmallVec;

/// Sample cell values retained per column.
pub const SAMPLE_SIZE: usize = 3;

/// One line of the worksheet census.
#[derive(Debug)]
pub struct SheetSummary {
    pub name: String,
    /// `A1:AN54`-style extent, `None` for an empty sheet.
    pub dimensions: Option<String>,
    pub row_count: usize,
    pub column_count: usize,
    /// Non-empty header cells from row 1, capped at the census column limit.
    pub headers: Vec<String>,
}

/// Full structural analysis of a single worksheet. Row 1 is the header row;
/// data rows start at row 2.
#[derive(Debug)]
pub struct SheetAnalysis {
    pub sheet_name: String,
    pub dimensions: Option<String>,
    pub row_count: usize,
    pub column_count: usize,
    pub data_row_count: usize,
    /// Raw header row, one entry per column, `None` where the cell is blank.
    pub headers: Vec<Option<String>>,
    pub columns: Vec<ColumnInfo>,
    /// Rows 2-6, first 30 columns, empty cells skipped.
    pub sample_rows: Vec<SampleRow>,
    /// Rows 2-4 restricted to the key prediction columns, empty cells kept.
    pub key_rows: Vec<SampleRow>,
    pub mapped_columns: Vec<MappedColumn>,
    /// Day-of-month the kickoff heuristic compared against.
    pub today: u32,
    pub matches_today: usize,
}

#[derive(Debug)]
pub struct ColumnInfo {
    /// 1-based column index.
    pub index: usize,
    pub name: String,
    pub data_type: &'static str,
    pub sample_values: SmallVec<[String; SAMPLE_SIZE]>,
    pub null_count: usize,
    /// `null_count / data rows * 100`, rounded to one decimal place.
    pub null_percentage: f64,
    pub unique_count: usize,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub has_duplicates: bool,
}

/// A mapped prediction field joined with what the sheet actually holds.
#[derive(Debug)]
pub struct MappedColumn {
    pub column: usize,
    pub field: &'static str,
    pub market: Option<&'static str>,
    pub header: Option<String>,
    /// Display value of the first data row, when present.
    pub sample: Option<String>,
}

#[derive(Debug)]
pub struct SampleRow {
    /// 1-based worksheet row.
    pub row: usize,
    pub cells: Vec<SampleCell>,
}

#[derive(Debug)]
pub struct SampleCell {
    pub column: usize,
    pub header: String,
    pub value: String,
}
