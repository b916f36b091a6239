use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

const EN: &str = r#"{
  "save": "Save",
  "old": "Old",
  "button": {
    "legacy": "Legacy",
    "ok": "OK"
  }
}
"#;

const ZH: &str = r#"{
  "save": "保存",
  "old": "旧"
}
"#;

fn setup(test: &CliTest) -> Result<()> {
    test.write_file("src/locales/en/common.json", EN)?;
    test.write_file("src/locales/zh/common.json", ZH)?;
    test.write_file(
        "src/App.tsx",
        "function App() {\n  const a = t('common:save');\n  const b = t('button.ok');\n}\n",
    )
}

fn json_key_exists(content: &str, key_path: &str) -> Result<bool> {
    let parsed: Value = serde_json::from_str(content).context("JSON should be parseable")?;
    let mut current = &parsed;
    for part in key_path.split('.') {
        match current.get(part) {
            Some(v) => current = v,
            None => return Ok(false),
        }
    }
    Ok(true)
}

#[test]
fn test_unused_keys_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup(&test)?;

    let output = test.run(&["unused-keys", "--output", "unused.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("- src/locales/en/common.json:3  old"));
    assert!(output.stdout.contains("- src/locales/en/common.json:5  button.legacy"));
    assert!(output.stdout.contains("- src/locales/zh/common.json:3  old"));
    assert!(output.stdout.contains("Would delete 3 key(s) in 2 file(s)."));
    assert!(output.stdout.contains("Run with --execute to delete these keys."));

    assert_eq!(test.read_file("src/locales/en/common.json")?, EN);
    assert_eq!(test.read_file("src/locales/zh/common.json")?, ZH);

    let report = test.read_file("unused.md")?;
    assert!(report.contains("Found 3 unused keys"));
    assert!(report.contains("- `common:button.legacy` (line 5)"));
    assert!(report.contains("| common | 3 |"));
    Ok(())
}

#[test]
fn test_unused_keys_execute_deletes_keys() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup(&test)?;

    let output = test.run(&["unused-keys", "--execute", "--output", "unused.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output
        .stdout
        .contains("Deleted 3 key(s) in 2 file(s) (processed 3 key(s))."));

    let en = test.read_file("src/locales/en/common.json")?;
    assert!(json_key_exists(&en, "save")?);
    assert!(json_key_exists(&en, "button.ok")?);
    assert!(!json_key_exists(&en, "old")?);
    assert!(!json_key_exists(&en, "button.legacy")?);
    assert!(en.ends_with("}\n"));

    let zh = test.read_file("src/locales/zh/common.json")?;
    assert_eq!(zh, "{\n  \"save\": \"保存\"\n}\n");
    Ok(())
}

#[test]
fn test_unused_keys_second_run_finds_nothing() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup(&test)?;

    test.run(&["unused-keys", "--execute", "--output", "first.md"])?;
    let output = test.run(&["unused-keys", "--output", "second.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No unused translation keys found"));
    assert!(test.read_file("second.md")?.contains("No unused translation keys found."));
    Ok(())
}

#[test]
fn test_unused_keys_skips_malformed_catalog() -> Result<()> {
    let test = CliTest::with_languages(&["en", "zh"])?;
    setup(&test)?;
    test.write_file("src/locales/zh/common.json", "{ \"save\": ")?;

    let output = test.run(&["unused-keys", "--execute", "--output", "unused.md"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("warning: Cannot load catalog src/locales/zh/common.json"));
    assert!(output
        .stdout
        .contains("Deleted 2 key(s) in 1 file(s) (processed 2 key(s))."));
    assert_eq!(test.read_file("src/locales/zh/common.json")?, "{ \"save\": ");
    Ok(())
}
