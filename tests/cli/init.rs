use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (stdout, _, code) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "\u{2713} Created .wclexrc.json\n");

    let content = test.read_file(".wclexrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["attr"], "data-i18n");
    assert_eq!(parsed["optionAttr"], "data-i18n-options");
    assert!(parsed["extensions"].is_array());
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".wclexrc.json", "{}")?;

    let (_, stderr, code) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, Some(1));
    assert_eq!(stderr, "Error: .wclexrc.json already exists\n");
    assert_eq!(test.read_file(".wclexrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_then_extract_uses_defaults() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<p data-i18n="hello"></p>"#)?;

    let mut init = test.command();
    init.arg("init");
    run(init)?;

    let mut cmd = test.extract_command();
    cmd.args(["--format", "json"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, Some(0));
    let parsed: Value = serde_json::from_str(&stdout)?;
    assert_eq!(parsed[0]["keys"][0]["key"], "hello");

    Ok(())
}
