use anyhow::Result;

use crate::CliTest;

fn setup_sources(test: &CliTest) -> Result<()> {
    test.write_file(
        "src/App.tsx",
        "function App() {\n  const a = t('common:save');\n  const b = t('cancel');\n}\n",
    )
}

#[test]
fn test_validate_clean_project_passes() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup_sources(&test)?;
    test.write_file(
        "src/locales/en/common.json",
        r#"{"save": "Save", "cancel": "Cancel"}"#,
    )?;
    test.write_file(
        "src/locales/zh/common.json",
        r#"{"save": "保存", "cancel": "取消"}"#,
    )?;

    let output = test.run(&["validate", "--output", "validate.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output
        .stdout
        .contains("Checked 1 source file, 2 catalog files - no issues found"));
    assert!(test.read_file("validate.md")?.contains("No issues found."));
    Ok(())
}

#[test]
fn test_validate_missing_translation_fails() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup_sources(&test)?;
    test.write_file(
        "src/locales/en/common.json",
        r#"{"save": "Save", "cancel": "Cancel"}"#,
    )?;
    test.write_file("src/locales/zh/common.json", r#"{"save": "保存"}"#)?;

    let output = test.run(&["validate", "--output", "validate.md"])?;

    assert_eq!(output.code, Some(1));
    assert!(output
        .stdout
        .contains("error: \"missing zh translation: cancel\"  missing-translation"));
    assert!(output.stdout.contains("--> src/locales/zh/common.json"));
    assert!(output
        .stdout
        .contains("warning: \"zh is missing key: common:cancel\"  inconsistent-key"));

    let report = test.read_file("validate.md")?;
    assert!(report.contains("## Missing translations (1)"));
    assert!(report.contains("- **common**: missing zh translation: cancel"));
    assert!(report.contains("## Inconsistent keys (1)"));
    Ok(())
}

#[test]
fn test_validate_inconsistency_alone_passes() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup_sources(&test)?;
    test.write_file(
        "src/locales/en/common.json",
        r#"{"save": "Save", "cancel": "Cancel"}"#,
    )?;
    test.write_file(
        "src/locales/zh/common.json",
        r#"{"save": "保存", "cancel": "取消", "extra": "多余"}"#,
    )?;

    let output = test.run(&["validate", "--output", "validate.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("zh has extra key: common:extra"));
    assert!(output.stdout.contains("unused translation key: common:extra"));
    assert!(output.stdout.contains("missing: 0, load errors: 0, inconsistent: 1, unused: 1"));
    Ok(())
}

#[test]
fn test_validate_malformed_catalog_fails() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup_sources(&test)?;
    test.write_file(
        "src/locales/en/common.json",
        r#"{"save": "Save", "cancel": "Cancel"}"#,
    )?;
    test.write_file("src/locales/zh/common.json", "{ broken")?;

    let output = test.run(&["validate", "--output", "validate.md"])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("warning: Cannot load catalog src/locales/zh/common.json"));
    assert!(output.stdout.contains("load-error"));
    assert!(test.read_file("validate.md")?.contains("## Load errors (1)"));
    Ok(())
}

#[test]
fn test_validate_language_override() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup_sources(&test)?;
    test.write_file(
        "src/locales/en/common.json",
        r#"{"save": "Save", "cancel": "Cancel"}"#,
    )?;
    test.write_file("src/locales/zh/common.json", r#"{}"#)?;

    let output = test.run(&["validate", "--languages", "en", "--output", "validate.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output
        .stdout
        .contains("Checked 1 source file, 1 catalog file - no issues found"));
    Ok(())
}
