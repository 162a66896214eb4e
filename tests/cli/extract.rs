use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

const CARD: &str = r#"
<app-card data-i18n="[title]card.title;card.body">
  <app-button
    data-i18n
    data-i18n-options='{"defaultValue": "Save"}'
  >
    card.save
  </app-button>
</app-card>
"#;

fn parse_json(stdout: &str) -> Result<Value> {
    Ok(serde_json::from_str(stdout)?)
}

#[test]
fn test_extract_json() -> Result<()> {
    let test = CliTest::with_file("src/components/card.html", CARD)?;
    test.write_file("src/components/card.css", ".card { color: red; }")?;

    let (stdout, stderr, code) = run({
        let mut cmd = test.extract_command();
        cmd.args(["--format", "json"]);
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert_eq!(stderr, "");
    assert_eq!(
        parse_json(&stdout)?,
        json!([
            {
                "file": "./src/components/card.html",
                "keys": [
                    { "key": "card.title" },
                    { "key": "card.body" },
                    { "key": "card.save", "defaultValue": "Save" }
                ]
            }
        ])
    );

    Ok(())
}

#[test]
fn test_extract_text() -> Result<()> {
    let test = CliTest::with_file(
        "index.html",
        r#"<p data-i18n="first;second" data-i18n-options='{"defaultValue": "Hi"}'></p>"#,
    )?;

    let (stdout, _, code) = run(test.extract_command())?;

    assert_eq!(code, Some(0));
    assert_snapshot!(stdout, @r#"
    ./index.html
      first (default: "Hi")
      second (default: "Hi")

    ✓ Extracted 2 keys from 1 file
    "#);

    Ok(())
}

#[test]
fn test_extract_no_keys() -> Result<()> {
    let test = CliTest::with_file("index.html", "<p>Hello</p>")?;

    let (stdout, _, code) = run(test.extract_command())?;

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "\u{2713} Scanned 1 file - no keys found\n");

    Ok(())
}

#[test]
fn test_config_attr_names() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".wclexrc.json",
        r#"{ "attr": "data-other", "optionAttr": "data-other-options" }"#,
    )?;
    test.write_file(
        "page.html",
        r#"<p data-i18n="ignored"></p><p data-other="first" data-other-options='{"defaultValue": "bar"}'></p>"#,
    )?;

    let mut cmd = test.extract_command();
    cmd.args(["--format", "json"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert_eq!(
        parse_json(&stdout)?,
        json!([{ "file": "./page.html", "keys": [{ "key": "first", "defaultValue": "bar" }] }])
    );

    Ok(())
}

#[test]
fn test_attr_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".wclexrc.json", r#"{ "attr": "data-other" }"#)?;
    test.write_file("page.html", r#"<p data-key="flag"></p><p data-other="config"></p>"#)?;

    let mut cmd = test.extract_command();
    cmd.args(["--attr", "data-key", "--format", "json"]);
    let (stdout, _, _) = run(cmd)?;

    assert_eq!(
        parse_json(&stdout)?,
        json!([{ "file": "./page.html", "keys": [{ "key": "flag" }] }])
    );

    Ok(())
}

#[test]
fn test_config_includes_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".wclexrc.json",
        r#"{ "includes": ["src"], "ignores": ["**/generated/**"], "extensions": ["html"] }"#,
    )?;
    test.write_file("src/a.html", r#"<p data-i18n="a"></p>"#)?;
    test.write_file("src/b.vue", r#"<p data-i18n="b"></p>"#)?;
    test.write_file("src/generated/c.html", r#"<p data-i18n="c"></p>"#)?;
    test.write_file("other/d.html", r#"<p data-i18n="d"></p>"#)?;

    let mut cmd = test.extract_command();
    cmd.args(["--format", "json"]);
    let (stdout, _, _) = run(cmd)?;

    assert_eq!(
        parse_json(&stdout)?,
        json!([{ "file": "./src/a.html", "keys": [{ "key": "a" }] }])
    );

    Ok(())
}

#[test]
fn test_explicit_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("templates/page.tpl", r#"<p data-i18n="tpl"></p>"#)?;
    test.write_file("web/x.html", r#"<p data-i18n="x"></p>"#)?;
    test.write_file("skipped.html", r#"<p data-i18n="skipped"></p>"#)?;

    let mut cmd = test.extract_command();
    cmd.args(["templates/page.tpl", "web", "--format", "json"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert_eq!(
        parse_json(&stdout)?,
        json!([
            { "file": "templates/page.tpl", "keys": [{ "key": "tpl" }] },
            { "file": "web/x.html", "keys": [{ "key": "x" }] }
        ])
    );

    Ok(())
}

#[test]
fn test_malformed_options_warning() -> Result<()> {
    let test = CliTest::with_file(
        "index.html",
        "<div>\n  <p data-i18n=\"first\" data-i18n-options='{broken'></p>\n</div>\n",
    )?;

    let (stdout, stderr, code) = run(test.extract_command())?;
    assert_eq!(code, Some(0));
    assert!(stdout.contains("  first\n"));
    assert_eq!(
        stderr,
        "warning: 1 tag(s) had malformed options (use -v for details)\n"
    );

    let mut cmd = test.extract_command();
    cmd.arg("-v");
    let (_, stderr, _) = run(cmd)?;
    assert!(
        stderr.starts_with("warning: ./index.html:2: <p> invalid options JSON:"),
        "unexpected stderr: {}",
        stderr
    );

    Ok(())
}

#[test]
fn test_non_utf8_file_is_still_extracted() -> Result<()> {
    let test = CliTest::with_file("good.html", r#"<p data-i18n="good"></p>"#)?;
    let mut latin1 = b"<p data-i18n>Caf".to_vec();
    latin1.extend_from_slice(&[0xe9, b'<', b'/', b'p', b'>']);
    std::fs::write(test.root().join("latin1.html"), latin1)?;

    let mut cmd = test.extract_command();
    cmd.args(["--format", "json"]);
    let (stdout, stderr, code) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert_eq!(
        parse_json(&stdout)?,
        json!([
            { "file": "./good.html", "keys": [{ "key": "good" }] },
            { "file": "./latin1.html", "keys": [{ "key": "Caf\u{fffd}" }] },
        ])
    );
    assert_eq!(stderr, "");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".wclexrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let (_, stderr, code) = run(test.extract_command())?;

    assert_eq!(code, Some(2));
    assert!(stderr.starts_with("Error: Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (stdout, _, code) = run(test.command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Usage: wclex"));
    assert!(stdout.contains("extract"));

    Ok(())
}
