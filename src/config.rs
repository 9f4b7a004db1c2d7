use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Conventional location of the prediction workbook.
pub const DEFAULT_WORKBOOK: &str = "Resources/predictions.xlsx";

/// Locations tried in order when the conventional path is missing.
pub const FALLBACK_WORKBOOKS: &[&str] = &[
    "MatchPredictor.Web/Resources/predictions.xlsx",
    "predictions.xlsx",
];

/// Locate the workbook to inspect. An explicit override is taken as-is and
/// never falls back; without one, the conventional path is tried first and
/// then each fallback location.
pub fn resolve_workbook(override_path: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(AppError::FileNotFound {
            searched: vec![path.to_path_buf()],
        });
    }

    let primary = PathBuf::from(DEFAULT_WORKBOOK);
    if primary.is_file() {
        return Ok(primary);
    }

    tracing::warn!(
        "workbook missing at {}, trying fallback locations",
        primary.display()
    );

    let mut searched = vec![primary];
    for candidate in FALLBACK_WORKBOOKS {
        let candidate = PathBuf::from(candidate);
        if candidate.is_file() {
            tracing::info!("found workbook at {}", candidate.display());
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    Err(AppError::FileNotFound { searched })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_path_is_used_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.xlsx");
        std::fs::write(&path, b"stub").unwrap();

        let resolved = resolve_workbook(Some(&path)).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn missing_override_reports_only_that_path() {
        let missing = Path::new("/definitely/not/here.xlsx");
        match resolve_workbook(Some(missing)) {
            Err(AppError::FileNotFound { searched }) => {
                assert_eq!(searched, vec![missing.to_path_buf()]);
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
