//! Read calibration artifacts from disk.
//!
//! The artifact schema lives in `calibration::CalibrationArtifact`; this
//! module only handles file access. Note that a *readable* artifact can still
//! be rejected against the deployed question set — that check happens in
//! `calibration::load_calibration` and falls back silently. Unreadable or
//! syntactically invalid files, by contrast, are reported as hard errors so a
//! misconfigured path is not mistaken for a fallback run.

use std::fs::File;
use std::path::Path;

use crate::calibration::CalibrationArtifact;
use crate::error::AppError;

/// Read a calibration artifact JSON file.
pub fn read_calibration_json(path: &Path) -> Result<CalibrationArtifact, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open calibration '{}': {e}", path.display()))
    })?;
    let artifact: CalibrationArtifact = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid calibration JSON: {e}")))?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_a_camel_case_artifact() {
        let json = r#"{
            "version": "v4-2pl-empirical-cdf",
            "generatedAt": "2025-11-03",
            "seed": 4242,
            "populationSize": 200000,
            "quantileStep": 0.1,
            "questionIds": ["Q0", "Q1"],
            "difficulties": [-0.5, 0.8],
            "discriminations": [1.2, 1.7],
            "thetaQuantiles": [-3.0, -1.0, 0.0, 1.0, 3.0]
        }"#;

        let dir = std::env::temp_dir();
        let path = dir.join("worldrank_calibration_test.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let artifact = read_calibration_json(&path).unwrap();
        assert_eq!(artifact.version, "v4-2pl-empirical-cdf");
        assert_eq!(artifact.question_ids, vec!["Q0", "Q1"]);
        assert_eq!(artifact.theta_quantiles.len(), 5);
        assert!((artifact.quantile_step - 0.1).abs() < 1e-12);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        let err = read_calibration_json(Path::new("/nonexistent/calibration.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
