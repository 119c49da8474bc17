//! End-to-end tests for the promptdata binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use rstest::{fixture, rstest};
use tempfile::TempDir;

const SKELETON_PRETTY: &str = r#"{
  "promptParts": {
    "persona": [],
    "goal": [],
    "context": [],
    "tone": []
  },
  "templates": [],
  "agents": [],
  "promptHistory": []
}"#;

/// Binary with an isolated config home and colors off.
fn promptdata(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("promptdata").unwrap();
    cmd.env("XDG_CONFIG_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[fixture]
fn workdir() -> TempDir {
    promptdata::util::testing::init_test_setup();
    TempDir::new().unwrap()
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write data file");
    path
}

#[rstest]
fn given_save_when_loading_then_prints_exact_skeleton(workdir: TempDir) {
    let path = workdir.path().join("x.json");

    promptdata(workdir.path())
        .arg("save")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved to"));

    promptdata(workdir.path())
        .arg("load")
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("{}\n", SKELETON_PRETTY));
}

#[rstest]
fn given_existing_content_when_saving_then_replaced_by_skeleton(workdir: TempDir) {
    let path = write_file(
        &workdir,
        "data.json",
        r#"{"templates": [{"id": 1, "name": "Greeting"}], "custom": true}"#,
    );

    promptdata(workdir.path())
        .arg("save")
        .arg(&path)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), SKELETON_PRETTY);
}

#[rstest]
fn given_two_saves_when_comparing_then_byte_identical(workdir: TempDir) {
    let path = workdir.path().join("x.json");

    promptdata(workdir.path()).arg("save").arg(&path).assert().success();
    let first = fs::read(&path).unwrap();
    promptdata(workdir.path()).arg("save").arg(&path).assert().success();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[rstest]
fn given_two_templates_when_listing_then_exactly_two_lines(workdir: TempDir) {
    let path = write_file(
        &workdir,
        "data.json",
        r#"{"templates": [{"id": 1, "name": "Greeting"}, {"id": 2, "name": "Closing"}]}"#,
    );

    promptdata(workdir.path())
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout("Template ID: 1, Name: Greeting\nTemplate ID: 2, Name: Closing\n");
}

#[rstest]
#[case::empty_list(r#"{"templates": []}"#)]
#[case::missing_key(r#"{"agents": []}"#)]
#[case::null_value(r#"{"templates": null}"#)]
#[case::empty_object(r#"{"templates": {}}"#)]
#[case::empty_string(r#"{"templates": ""}"#)]
#[case::zero(r#"{"templates": 0}"#)]
#[case::false_value(r#"{"templates": false}"#)]
fn given_no_templates_when_listing_then_only_notice(workdir: TempDir, #[case] content: &str) {
    let path = write_file(&workdir, "data.json", content);

    promptdata(workdir.path())
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout("No templates found.\n");
}

#[rstest]
#[case::no_args(&[])]
#[case::command_only(&["load"])]
fn given_missing_arguments_when_invoked_then_usage_and_exit_one(
    workdir: TempDir,
    #[case] args: &[&str],
) {
    promptdata(workdir.path())
        .args(args)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage:"));
}

#[rstest]
#[case::load("load")]
#[case::list("list")]
fn given_malformed_json_when_reading_then_parse_error_without_output(
    workdir: TempDir,
    #[case] command: &str,
) {
    let path = write_file(&workdir, "bad.json", r#"{"templates": [{"id": 1,"#);

    promptdata(workdir.path())
        .arg(command)
        .arg(&path)
        .assert()
        .code(65)
        .stdout("")
        .stderr(predicate::str::contains("invalid JSON"));
}

#[rstest]
fn given_missing_file_when_loading_then_noinput(workdir: TempDir) {
    let path = workdir.path().join("missing.json");

    promptdata(workdir.path())
        .arg("load")
        .arg(&path)
        .assert()
        .code(66)
        .stdout("")
        .stderr(predicate::str::contains("file not found"));
}

#[rstest]
fn given_unwritable_destination_when_saving_then_io_error(workdir: TempDir) {
    let path = workdir.path().join("no-such-dir").join("x.json");

    promptdata(workdir.path())
        .arg("save")
        .arg(&path)
        .assert()
        .code(74)
        .stderr(predicate::str::contains("write document"));
}

#[rstest]
fn given_unknown_command_when_invoked_then_notice_and_exit_zero(workdir: TempDir) {
    let path = workdir.path().join("x.json");

    promptdata(workdir.path())
        .arg("export")
        .arg(&path)
        .assert()
        .success()
        .stdout("Unknown command.\n");

    assert!(!path.exists());
}

#[rstest]
fn given_populated_document_when_loading_then_key_order_preserved(workdir: TempDir) {
    let content = r#"{"templates": [{"name": "Greeting", "id": 1}], "promptParts": {"tone": ["Witty"]}}"#;
    let path = write_file(&workdir, "data.json", content);

    let expected = r#"{
  "templates": [
    {
      "name": "Greeting",
      "id": 1
    }
  ],
  "promptParts": {
    "tone": [
      "Witty"
    ]
  }
}
"#;

    promptdata(workdir.path())
        .arg("load")
        .arg(&path)
        .assert()
        .success()
        .stdout(expected);
}

#[rstest]
fn given_integer_beyond_64_bits_when_loading_then_digits_unchanged(workdir: TempDir) {
    let path = write_file(
        &workdir,
        "data.json",
        r#"{"templates":[{"id":123456789012345678901234567890,"name":"x"}]}"#,
    );

    promptdata(workdir.path())
        .arg("load")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 123456789012345678901234567890,"#));

    promptdata(workdir.path())
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout("Template ID: 123456789012345678901234567890, Name: x\n");
}

#[rstest]
fn given_filename_with_leading_hyphen_when_saving_then_written(workdir: TempDir) {
    promptdata(workdir.path())
        .current_dir(workdir.path())
        .args(["save", "-x.json"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(workdir.path().join("-x.json")).unwrap(),
        SKELETON_PRETTY
    );
}

#[rstest]
fn given_document_when_summarizing_then_counts_printed(workdir: TempDir) {
    let path = write_file(
        &workdir,
        "data.json",
        r#"{
            "promptParts": {"persona": ["Marketing Expert", "AI Strategist"], "goal": [], "context": [], "tone": ["Witty"]},
            "templates": [{"id": "_t1", "name": "Landing page"}],
            "agents": [],
            "promptHistory": [{"id": "_h1", "content": "You are a Marketing Expert."}]
        }"#,
    );

    promptdata(workdir.path())
        .arg("summary")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "Prompt parts:\n  persona: 2\n  goal: 0\n  context: 0\n  tone: 1\n\
             Templates: 1\nAgents: 0\nPrompt history: 1\n",
        );
}

#[rstest]
fn given_agents_when_listing_agents_then_linked_templates_shown(workdir: TempDir) {
    let path = write_file(
        &workdir,
        "data.json",
        r#"{"agents": [
            {"id": "_a1", "name": "Copywriter", "personality": "Witty", "templateId": "_t1"},
            {"id": "_a2", "name": "Researcher", "templateId": ""}
        ]}"#,
    );

    promptdata(workdir.path())
        .arg("agents")
        .arg(&path)
        .assert()
        .success()
        .stdout("Agent ID: _a1, Name: Copywriter, Template: _t1\nAgent ID: _a2, Name: Researcher\n");
}

#[rstest]
fn given_templates_wrong_shape_when_listing_then_dataerr(workdir: TempDir) {
    let path = write_file(&workdir, "data.json", r#"{"templates": 5}"#);

    promptdata(workdir.path())
        .arg("list")
        .arg(&path)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("invalid shape for 'templates'"));
}

#[rstest]
fn given_missing_config_file_when_invoked_then_config_error(workdir: TempDir) {
    let path = workdir.path().join("x.json");
    let config = workdir.path().join("absent.toml");

    promptdata(workdir.path())
        .arg("--config")
        .arg(&config)
        .arg("save")
        .arg(&path)
        .assert()
        .code(78);

    assert!(!path.exists());
}

#[rstest]
fn given_generate_flag_when_invoked_then_completion_script(workdir: TempDir) {
    promptdata(workdir.path())
        .args(["--generate", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("promptdata"));
}
