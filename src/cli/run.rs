//! The check-and-report loop.

use std::io::Write;

use anyhow::Context;

use crate::checker::Checker;
use crate::error::Result;
use crate::probe::VersionProbe;
use crate::report::{
    HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, ReportSummary,
};
use crate::resolve::Resolver;
use crate::ui::HasTheme;

use super::args::Cli;

/// Check every name from the command line and write the report.
///
/// Returns the summary; the caller maps it to an exit code.
pub fn run<W: Write>(cli: &Cli, writer: &mut W) -> Result<ReportSummary> {
    let timeout = cli.timeout();
    let checker = Checker::new(
        Resolver::from_env().with_shell_check_timeout(timeout),
        VersionProbe::new(timeout),
    );

    tracing::debug!(
        "Checking {} name(s), probe timeout {:?}",
        cli.names.len(),
        timeout
    );

    match cli.format {
        OutputFormat::Human => {
            let formatter = HumanFormatter::new(HasTheme::detect(cli.no_color));
            report(&checker, &cli.names, formatter, writer)
        }
        OutputFormat::Json => report(&checker, &cli.names, JsonFormatter::new(), writer),
    }
}

/// Check names in order, handing each result to `formatter` as soon as it
/// is known.
pub fn report<F, W>(
    checker: &Checker,
    names: &[String],
    mut formatter: F,
    writer: &mut W,
) -> Result<ReportSummary>
where
    F: ReportFormatter,
    W: Write,
{
    let mut summary = ReportSummary::default();
    for name in names {
        let line = checker.check_one(name);
        summary.record(&line);
        formatter
            .line(&line, writer)
            .with_context(|| format!("Failed to write result for '{}'", name))?;
    }
    formatter
        .finish(&summary, writer)
        .context("Failed to write report summary")?;
    Ok(summary)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn report_streams_lines_and_summarizes() {
        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("widget");
        fs::write(&tool, "#!/bin/sh\necho 'widget 0.4.2'\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        let checker = Checker::new(
            Resolver::new(vec![temp.path().to_path_buf()]),
            VersionProbe::new(Duration::from_secs(5)),
        );
        let names = vec![
            "widget".to_string(),
            "nonexistentcmd123".to_string(),
            "cd".to_string(),
        ];

        let mut out = Vec::new();
        let summary = report(&checker, &names, HumanFormatter::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "✓ widget 0.4.2\n✗ nonexistentcmd123 command not found\n✓ cd shell builtin\n"
        );
        assert_eq!(summary.total, 3);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.exit_code(), 1);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn report_write_failure_names_the_query() {
        let checker = Checker::new(Resolver::new(Vec::new()), VersionProbe::default());
        let names = vec!["cd".to_string()];

        let err = report(&checker, &names, HumanFormatter::default(), &mut ClosedPipe)
            .unwrap_err();

        assert!(matches!(err, crate::error::HasError::Other(_)));
        assert!(err.to_string().contains("'cd'"));
    }

    #[test]
    fn report_json_is_single_document() {
        let checker = Checker::new(Resolver::new(Vec::new()), VersionProbe::default());
        let names = vec!["cd".to_string(), "nope".to_string()];

        let mut out = Vec::new();
        let summary = report(&checker, &names, JsonFormatter::new(), &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["results"][0]["name"], "cd");
        assert_eq!(json["results"][1]["status"], "missing");
        assert!(!summary.is_success());
    }
}
