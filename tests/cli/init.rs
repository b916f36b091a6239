use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .i18nrc.json"));

    let content = test.read_file(".i18nrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["localesDir"], "src/locales");
    assert_eq!(parsed["srcDir"], "src");
    assert_eq!(parsed["defaultNamespace"], "common");
    assert_eq!(parsed["minLength"], 3);
    assert!(content.contains("\n  \"languages\""), "2-space indentation");
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Error: .i18nrc.json already exists"));
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("src/App.tsx", "")?;

    let output = test.run(&["stats", "--output", "stats.md"])?;

    assert_eq!(output.code, Some(0));
    Ok(())
}
