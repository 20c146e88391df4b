use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const STRINGS: &str = r#"/* Home screen */
"a.b" = "X";
"c.d" = "";
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("Localizable.strings", STRINGS)?;
    test.write_file("project/View.swift", "label = \"a.b\";\n")?;
    Ok(test)
}

#[test]
fn test_reports_unused_and_empty_values() -> Result<()> {
    let test = project()?;

    let mut cmd = test.check_command("Localizable.strings", "project", 0);
    cmd.arg("--log-empty-values");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(0));
    assert_snapshot!(result.stdout, @r#"
    loccheck
    Checks whether keys from a strings file are unused in a project.
    --------------------------------------------------------

    Will check keys from file...
      Localizable.strings
    in all files from directory...
      project

    info: Empty values will be logged.
    Running... (this may take a while on large projects)

    warning: key '"c.d"' has an empty value.
    ✘ key '"c.d"' is unused (found 0 time).

    ✓ Finished: checked 2 keys, 1 unused.
    "#);

    Ok(())
}

#[test]
fn test_verbose_prints_used_keys() -> Result<()> {
    let test = project()?;

    let mut cmd = test.check_command("Localizable.strings", "project", 0);
    cmd.arg("--anxious-mode");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("✓ key '\"a.b\"' is used 1 time."));
    assert!(result.stdout.contains("✘ key '\"c.d\"' is unused (found 0 time)."));
    assert!(!result.stdout.contains("empty value"));

    Ok(())
}

#[test]
fn test_silent_for_used_keys_by_default() -> Result<()> {
    let test = project()?;

    let result = run(test.check_command("Localizable.strings", "project", 0))?;

    assert!(!result.stdout.contains("\"a.b\""));
    assert!(result.stdout.contains("\"c.d\""));

    Ok(())
}

#[test]
fn test_threshold_counts_strings_files_in_project() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("App/en.lproj/Localizable.strings", STRINGS)?;
    test.write_file("App/fr.lproj/Localizable.strings", STRINGS)?;
    test.write_file("App/View.swift", "Text(\"a.b\")\n")?;

    let result = run(test.check_command("App/en.lproj/Localizable.strings", "App", 2))?;
    assert!(result.stdout.contains("✘ key '\"c.d\"' is unused (found 2 times)."));
    assert!(!result.stdout.contains("\"a.b\""));

    let mut cmd = test.check_command("App/en.lproj/Localizable.strings", "App", 0);
    cmd.args(["--extensions", "swift"]);
    let result = run(cmd)?;
    assert!(result.stdout.contains("in files with extension swift from directory"));
    assert!(result.stdout.contains("✘ key '\"c.d\"' is unused (found 0 time)."));
    assert!(!result.stdout.contains("\"a.b\""));

    Ok(())
}

#[test]
fn test_indexed_strategy_matches_rescan() -> Result<()> {
    let test = project()?;

    let mut rescan = test.check_command("Localizable.strings", "project", 0);
    rescan.arg("-v");
    let mut indexed = test.check_command("Localizable.strings", "project", 0);
    indexed.args(["-v", "--strategy", "indexed"]);

    assert_eq!(run(rescan)?.stdout, run(indexed)?.stdout);

    Ok(())
}

#[test]
fn test_fail_on_unused_sets_exit_code() -> Result<()> {
    let test = project()?;

    let mut cmd = test.check_command("Localizable.strings", "project", 0);
    cmd.arg("--fail-on-unused");
    assert_eq!(run(cmd)?.code, Some(1));

    test.write_file("project/Other.swift", "\"c.d\"\n")?;
    let mut cmd = test.check_command("Localizable.strings", "project", 0);
    cmd.arg("--fail-on-unused");
    assert_eq!(run(cmd)?.code, Some(0));

    Ok(())
}

#[test]
fn test_missing_project_aborts_before_scanning() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", STRINGS)?;

    let result = run(test.check_command("Localizable.strings", "NoSuchDir", 0))?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("NoSuchDir"));
    assert!(result.stdout.is_empty());

    Ok(())
}

#[test]
fn test_missing_source_file_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("project/View.swift", "")?;

    let result = run(test.check_command("Missing.strings", "project", 0))?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("File Missing.strings does not exist"));
    assert!(result.stdout.is_empty());

    Ok(())
}

#[test]
fn test_project_path_that_is_a_file_aborts() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", STRINGS)?;

    let result = run(test.check_command("Localizable.strings", "Localizable.strings", 0))?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Could not open directory"));
    assert!(!result.stdout.contains("key '"));

    Ok(())
}

#[test]
fn test_values_come_from_config_file() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".loccheckrc.json",
        r#"{
            "sourceFile": "Localizable.strings",
            "projectRoot": "project",
            "minOccurrences": 0,
            "extensions": ["swift"],
            "anxiousMode": true
        }"#,
    )?;

    let result = run(test.command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("in files with extension swift from directory"));
    assert!(result.stdout.contains("✓ key '\"a.b\"' is used 1 time."));

    Ok(())
}

#[test]
fn test_missing_arguments_without_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Missing SOURCE_FILE"));

    Ok(())
}

#[test]
fn test_unreadable_source_file_warns_in_verbose_mode() -> Result<()> {
    let test = project()?;
    test.write_file("Strings.dir/keep.txt", "")?;

    let mut cmd = test.check_command("Strings.dir", "project", 0);
    cmd.arg("-v");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stderr
            .contains("warning: could not read Strings.dir, no keys to check")
    );
    assert!(result.stdout.contains("Finished: checked 0 keys, 0 unused."));

    let result = run(test.check_command("Strings.dir", "project", 0))?;
    assert!(!result.stderr.contains("could not read"));

    Ok(())
}
