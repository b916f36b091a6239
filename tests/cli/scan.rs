use anyhow::Result;

use crate::CliTest;

const APP: &str = r#"import React from "react";

function App() {
  const title = "Welcome back";
  return <h1>Hello there</h1>;
}
"#;

#[test]
fn test_scan_reports_hardcoded_text() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file("src/App.tsx", APP)?;

    let output = test.run(&["scan", "--output", "scan.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Welcome back\"  hardcoded"));
    assert!(output.stdout.contains("--> src/App.tsx:4:17"));
    assert!(output.stdout.contains("warning: \"Hello there\"  hardcoded"));
    assert!(output.stdout.contains("--> src/App.tsx:5:13"));
    assert!(output.stdout.contains("Found 2 text(s) in 1 file(s) may need translation."));
    assert!(output.stdout.contains("Report saved to scan.md"));

    let report = test.read_file("scan.md")?;
    assert!(report.starts_with("# i18n Scan Report"));
    assert!(report.contains("## src/App.tsx"));
    assert!(report.contains("**Line 4** (string)"));
    assert!(report.contains("Text: \"Hello there\""));
    Ok(())
}

#[test]
fn test_scan_skips_expressions_and_test_files() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file(
        "src/App.tsx",
        "function App() {\n  return <h1>{title}</h1>;\n}\n",
    )?;
    test.write_file("src/App.test.tsx", "const label = \"Only in tests\";\n")?;

    let output = test.run(&["scan"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No hardcoded text found"));
    let reports = test.reports("i18n-scan-report")?;
    assert_eq!(reports.len(), 1);
    assert!(std::fs::read_to_string(&reports[0])?.contains("No hardcoded text found."));
    Ok(())
}

#[test]
fn test_scan_min_length_override() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file("src/App.tsx", "const a = \"Hi there\";\n")?;

    let output = test.run(&["scan", "--min-length", "20", "--output", "scan.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No hardcoded text found"));
    Ok(())
}

#[test]
fn test_scan_rejects_zero_min_length() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file("src/App.tsx", "")?;

    let output = test.run(&["scan", "--min-length", "0"])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("--min-length must be at least 1"));
    Ok(())
}

#[test]
fn test_scan_src_dir_override() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;
    test.write_file("src/App.tsx", "")?;
    test.write_file("app/page.tsx", "const heading = \"Plain heading\";\n")?;

    let output = test.run(&["scan", "--src-dir", "app", "--output", "scan.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("--> app/page.tsx:1:17"));
    assert!(test.root().join("scan.md").exists());
    Ok(())
}
