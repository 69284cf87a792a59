use crate::config::Config;
use anyhow::Context;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use ticky_log::{Aggregator, AnalyzeError};

/// Where a report run wrote its tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub errors: PathBuf,
    pub users: PathBuf,
}

/// Reads the log at `path` end to end.
pub fn analyze_file(path: &Path) -> anyhow::Result<Aggregator> {
    let file =
        File::open(path).with_context(|| format!("failed to open log {}", path.display()))?;
    let aggregator = ticky_log::analyze(BufReader::new(file))
        .with_context(|| format!("failed to analyze {}", path.display()))?;
    log::info!(
        "Analyzed {}: {} events",
        path.display(),
        aggregator.matched_events()
    );
    Ok(aggregator)
}

/// Writes both CSV tables under the configured output directory, creating it
/// when missing.
pub fn write_reports(aggregator: &Aggregator, config: &Config) -> anyhow::Result<ReportPaths> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let paths = ReportPaths {
        errors: config.errors_path(),
        users: config.users_path(),
    };

    let error_report = aggregator.error_report();
    write_table(&paths.errors, |w| error_report.write_csv(w))?;
    log::info!(
        "Wrote {} error messages to {}",
        error_report.rows.len(),
        paths.errors.display()
    );

    let user_report = aggregator.user_report();
    write_table(&paths.users, |w| user_report.write_csv(w))?;
    log::info!(
        "Wrote {} users to {}",
        user_report.rows.len(),
        paths.users.display()
    );

    Ok(paths)
}

fn write_table<F>(path: &Path, write: F) -> anyhow::Result<()>
where
    F: FnOnce(BufWriter<File>) -> Result<(), AnalyzeError>,
{
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write(BufWriter::new(file)).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const LOG: &str = "\
Jan 31 00:21:30 ubuntu.local ticky: ERROR Disk full (alice)
Jan 31 00:21:31 ubuntu.local ticky: ERROR Disk full (alice)
Jan 31 00:21:32 ubuntu.local ticky: INFO Login (bob)
garbage line
";

    fn config_in(dir: &Path) -> Config {
        Config {
            input: dir.join("syslog.log"),
            output_dir: dir.join("nested").join("output"),
            ..Config::default()
        }
    }

    #[test]
    fn test_reports_written_to_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, LOG).unwrap();

        let agg = analyze_file(&config.input).unwrap();
        let paths = write_reports(&agg, &config).unwrap();

        assert_eq!(
            fs::read_to_string(&paths.errors).unwrap(),
            "Error,Count\nDisk full,2\n"
        );
        assert_eq!(
            fs::read_to_string(&paths.users).unwrap(),
            "Username,INFO,ERROR\nalice,0,2\nbob,1,0\n"
        );
    }

    #[test]
    fn test_two_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = config_in(dir.path());
        fs::write(&first.input, LOG).unwrap();
        let second = Config {
            output_dir: dir.path().join("second"),
            ..first.clone()
        };

        let a = write_reports(&analyze_file(&first.input).unwrap(), &first).unwrap();
        let b = write_reports(&analyze_file(&second.input).unwrap(), &second).unwrap();

        assert_ne!(a, b);
        assert_eq!(fs::read(&a.errors).unwrap(), fs::read(&b.errors).unwrap());
        assert_eq!(fs::read(&a.users).unwrap(), fs::read(&b.users).unwrap());
    }

    #[test]
    fn test_missing_log_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.log");
        let err = analyze_file(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.log"));
    }
}
