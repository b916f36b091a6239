use anyhow::Result;

use crate::CliTest;

fn setup(test: &CliTest) -> Result<()> {
    test.write_file(
        "src/locales/en/common.json",
        r#"{"save": "Save", "old": "Old"}"#,
    )?;
    test.write_file("src/locales/zh/common.json", r#"{"save": "保存"}"#)?;
    test.write_file(
        "src/App.tsx",
        "function App() {\n  return <button>{t('common:save')}</button>;\n}\n",
    )
}

#[test]
fn test_stats_prints_coverage() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup(&test)?;

    let output = test.run(&["stats", "--output", "stats.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output
        .stdout
        .contains("Coverage 50.0% (1 of 2 keys used, 1 unused, 0 missing)"));
    assert!(output.stdout.contains("hint: Coverage is moderate"));
    assert!(output.stdout.contains("Report saved to stats.md"));

    let report = test.read_file("stats.md")?;
    assert!(report.contains("- **Total keys**: 2"));
    assert!(report.contains("- **Coverage**: 50.0%"));
    assert!(report.contains("| common | 2 | 1 | 1 | 0 | 50.0% |"));
    assert!(report.contains("`i18n-audit unused-keys`"));
    Ok(())
}

#[test]
fn test_stats_writes_timestamped_report_by_default() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup(&test)?;

    let output = test.run(&["stats"])?;

    assert_eq!(output.code, Some(0));
    let reports = test.reports("i18n-stats-report")?;
    assert_eq!(reports.len(), 1);
    let name = reports[0]
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let millis = name
        .trim_start_matches("i18n-stats-report-")
        .trim_end_matches(".md");
    assert!(millis.parse::<i64>().is_ok(), "unexpected report name {}", name);
    Ok(())
}

#[test]
fn test_stats_with_missing_catalog_files() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    test.write_file("src/App.tsx", "const x = t('common:save');\n")?;

    let output = test.run(&["stats", "--output", "stats.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output
        .stdout
        .contains("Coverage 0.0% (0 of 0 keys used, 0 unused, 1 missing)"));
    assert!(output.stderr.is_empty());
    Ok(())
}
