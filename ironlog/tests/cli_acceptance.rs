use ironlog_core::{BackfillState, Database, Journal};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    base: PathBuf,
    home: PathBuf,
    xdg_data: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_data = base.join("xdg-data");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_data).expect("failed to create XDG_DATA_HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        Self {
            _temp_dir: temp_dir,
            base,
            home,
            xdg_data,
            xdg_config,
            xdg_state,
        }
    }

    fn db_path(&self) -> PathBuf {
        self.xdg_data.join("ironlog/ironlog.db")
    }

    fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.base.join(name);
        fs::write(&path, contents).expect("failed to write input file");
        path
    }
}

fn fixture_path() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../ironlog-core/tests/fixtures/workouts.json")
        .to_string_lossy()
        .into_owned()
}

fn run(env: &CliTestEnv, args: &[&str]) -> Output {
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("ironlog"));
    let mut command = Command::new(bin_path);

    command
        .args(args)
        .env_remove("RUST_LOG")
        .env("HOME", &env.home)
        .env("XDG_DATA_HOME", &env.xdg_data)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute ironlog: {e}"))
}

fn assert_success(args: &[&str], output: &Output) {
    if output.status.success() {
        return;
    }

    let rendered_args = args
        .iter()
        .map(|arg| OsString::from(arg).to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    panic!(
        "ironlog {rendered_args} failed\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
        output.status, stdout, stderr
    );
}

fn run_ok(env: &CliTestEnv, args: &[&str]) -> String {
    let output = run(env, args);
    assert_success(args, &output);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const FINISHED_SQUAT: &str = r#"{
  "id": "w5",
  "name": "Beine",
  "templateId": null,
  "startTime": "2024-01-18T17:30:00Z",
  "endTime": null,
  "exercises": [
    {
      "id": "w5-e1",
      "exerciseId": "squat",
      "sets": [
        { "id": "w5-s1", "weight": 110, "reps": 5, "completed": true, "tag": null, "rpe": 9.5 }
      ],
      "notes": ""
    }
  ],
  "notes": ""
}"#;

#[test]
fn import_then_records_backfills_history() {
    let env = CliTestEnv::new();
    let fixture = fixture_path();

    let stdout = run_ok(&env, &["import", &fixture]);
    assert!(stdout.contains("Imported 4 workout(s)."), "got:\n{stdout}");

    let stdout = run_ok(&env, &["records", "--limit", "3"]);
    assert_eq!(stdout.lines().count(), 3, "got:\n{stdout}");
    assert!(stdout.contains("+2.5 kg"), "expected bench weight record, got:\n{stdout}");

    let db = Database::open(&env.db_path()).expect("failed to open db");
    db.migrate().expect("failed to migrate db");
    let journal = Journal::new(db);
    assert_eq!(journal.backfill_state().unwrap(), BackfillState::Backfilled);
    assert_eq!(journal.events().unwrap().len(), 15);

    let stdout = run_ok(&env, &["backfill"]);
    assert!(stdout.contains("already backfilled"), "got:\n{stdout}");
}

#[test]
fn records_json_for_one_exercise() {
    let env = CliTestEnv::new();
    run_ok(&env, &["import", &fixture_path()]);

    let stdout = run_ok(&env, &["records", "--exercise", "bench", "--format", "json"]);
    let events: serde_json::Value = serde_json::from_str(&stdout).expect("records json");
    let events = events.as_array().expect("array of records");
    assert_eq!(events.len(), 6);
    assert_eq!(events[0]["id"], "w4-bench-weight");
    assert_eq!(events[0]["metric"], "weight");
    assert_eq!(events[0]["exerciseId"], "bench");
}

#[test]
fn timeline_shows_progression_oldest_first() {
    let env = CliTestEnv::new();
    run_ok(&env, &["import", &fixture_path()]);

    let stdout = run_ok(&env, &["timeline", "squat", "weight"]);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "got:\n{stdout}");
    assert!(lines[1].contains("2024-01-08") && lines[1].contains("100 kg"));
    assert!(lines[2].contains("2024-01-10") && lines[2].contains("+5 kg"));
}

#[test]
fn finish_reports_new_records() {
    let env = CliTestEnv::new();
    run_ok(&env, &["import", &fixture_path()]);
    let workout = env.write_file("w5.json", FINISHED_SQUAT);
    let workout = workout.to_string_lossy().into_owned();

    let stdout = run_ok(&env, &["finish", &workout, "--at", "2024-01-18T18:45:00Z"]);
    assert!(stdout.contains("Finished Beine."), "got:\n{stdout}");
    assert!(stdout.contains("1 new personal record(s):"), "got:\n{stdout}");
    assert!(stdout.contains("+5 kg"), "got:\n{stdout}");

    // Finishing again records nothing new
    let stdout = run_ok(&env, &["finish", &workout]);
    assert!(
        stdout.contains("1 personal record(s), already recorded:"),
        "got:\n{stdout}"
    );
    assert!(!stdout.contains("new personal record"), "got:\n{stdout}");
    assert!(stdout.contains("+5 kg"), "got:\n{stdout}");
    let db = Database::open(&env.db_path()).expect("failed to open db");
    db.migrate().expect("failed to migrate db");
    assert_eq!(Journal::new(db).events().unwrap().len(), 16);
}

#[test]
fn raised_threshold_suppresses_record() {
    let env = CliTestEnv::new();
    run_ok(&env, &["import", &fixture_path()]);

    let stdout = run_ok(&env, &["settings", "set", "--threshold-weight", "10"]);
    assert!(stdout.contains("PR threshold weight:   +10 kg"), "got:\n{stdout}");

    let workout = env.write_file("w5.json", FINISHED_SQUAT);
    let stdout = run_ok(&env, &["finish", &workout.to_string_lossy()]);
    assert!(stdout.contains("No new personal records."), "got:\n{stdout}");

    run_ok(&env, &["settings", "reset"]);
    let stdout = run_ok(&env, &["settings", "show"]);
    assert!(stdout.contains("PR threshold weight:   +2.5 kg"), "got:\n{stdout}");
}

#[test]
fn settings_set_without_options_fails() {
    let env = CliTestEnv::new();
    let output = run(&env, &["settings", "set"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nothing to change"), "got:\n{stderr}");
}

#[test]
fn database_flag_overrides_default_location() {
    let env = CliTestEnv::new();
    let custom = env.base.join("custom/journal.db");
    let custom_arg = custom.to_string_lossy().into_owned();

    run_ok(&env, &["--database", &custom_arg, "import", &fixture_path()]);

    assert!(custom.exists(), "database should exist at {}", custom.display());
    assert!(!env.db_path().exists());

    let stdout = run_ok(&env, &["workouts", "--database", &custom_arg]);
    assert_eq!(stdout.lines().count(), 4, "got:\n{stdout}");
    assert!(stdout.contains("(active)"));
}

#[test]
fn measurements_round_trip_through_cli() {
    let env = CliTestEnv::new();

    let stdout = run_ok(&env, &["measure", "list"]);
    assert!(stdout.contains("No measurements yet."));

    run_ok(
        &env,
        &["measure", "add", "--weight", "82.5", "--date", "2024-01-01T07:00:00Z"],
    );
    run_ok(
        &env,
        &["measure", "add", "--weight", "81", "--body-fat", "17.5", "--date", "2024-02-01T07:00:00Z"],
    );

    let stdout = run_ok(&env, &["measure", "list"]);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "got:\n{stdout}");
    assert!(lines[0].starts_with("2024-02-01") && lines[0].contains("17.5%"));
    assert!(lines[1].starts_with("2024-01-01") && lines[1].contains("82.5 kg"));
}

/// The id printed in parentheses by the create commands.
fn created_id(stdout: &str) -> String {
    let start = stdout.rfind('(').expect("id in output") + 1;
    let end = stdout.rfind(')').expect("id in output");
    stdout[start..end].to_string()
}

#[test]
fn template_from_workout_in_folder_then_start() {
    let env = CliTestEnv::new();
    run_ok(&env, &["import", &fixture_path()]);

    let stdout = run_ok(&env, &["folders", "add", "Push"]);
    let folder = created_id(&stdout);

    let stdout = run_ok(&env, &["templates", "from-workout", "w4", "Oberkörper", "--folder", &folder]);
    assert!(stdout.contains("Saved template Oberkörper"), "got:\n{stdout}");
    let template = created_id(&stdout);

    let stdout = run_ok(&env, &["templates", "list", "--folder", &folder]);
    assert_eq!(stdout.lines().count(), 1, "got:\n{stdout}");
    assert!(stdout.contains("never used"), "got:\n{stdout}");

    let started = env.base.join("started.json");
    let started_arg = started.to_string_lossy().into_owned();
    run_ok(&env, &["templates", "start", &template, "--output", &started_arg]);
    let workout: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&started).expect("started workout")).unwrap();
    assert_eq!(workout["templateId"], template.as_str());
    assert_eq!(workout["name"], "Oberkörper");
    assert!(workout["endTime"].is_null());
    assert_eq!(workout["exercises"][0]["sets"][0]["completed"], false);

    let stdout = run_ok(&env, &["templates", "list"]);
    assert!(!stdout.contains("never used"), "got:\n{stdout}");

    // Nothing completed, so finishing it sets no records
    let stdout = run_ok(&env, &["finish", &started_arg]);
    assert!(stdout.contains("No new personal records."), "got:\n{stdout}");

    run_ok(&env, &["folders", "delete", &folder]);
    let stdout = run_ok(&env, &["folders", "list"]);
    assert!(stdout.contains("No folders yet."), "got:\n{stdout}");
    let stdout = run_ok(&env, &["templates", "list"]);
    assert_eq!(stdout.lines().count(), 1, "got:\n{stdout}");
}

#[test]
fn template_for_unknown_folder_fails() {
    let env = CliTestEnv::new();
    run_ok(&env, &["import", &fixture_path()]);

    let output = run(&env, &["templates", "from-workout", "w4", "Push", "--folder", "missing"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No folder with id missing"), "got:\n{stderr}");
}

#[test]
fn exercise_library_search_and_custom_entries() {
    let env = CliTestEnv::new();

    let stdout = run_ok(&env, &["exercises", "list", "--search", "kreuzheben"]);
    assert!(stdout.contains("ex-deadlift"), "got:\n{stdout}");

    let stdout = run_ok(&env, &["exercises", "list", "--muscle", "calves"]);
    assert!(stdout.lines().count() >= 1, "got:\n{stdout}");
    assert!(stdout.lines().all(|l| l.contains("calves")), "got:\n{stdout}");

    let stdout = run_ok(
        &env,
        &["exercises", "add", "Zercher Squat", "--category", "barbell", "--muscle", "quads"],
    );
    let custom = created_id(&stdout);

    let stdout = run_ok(&env, &["exercises", "list", "--search", "zercher"]);
    assert!(stdout.contains("(custom)"), "got:\n{stdout}");

    let output = run(&env, &["exercises", "delete", "ex-squat"]);
    assert!(!output.status.success());

    run_ok(&env, &["exercises", "delete", &custom]);
    let stdout = run_ok(&env, &["exercises", "list", "--search", "zercher"]);
    assert!(stdout.contains("No exercises found."), "got:\n{stdout}");
}

#[test]
fn records_show_exercise_names() {
    let env = CliTestEnv::new();
    let workout = env.write_file(
        "deadlift.json",
        r#"{
  "id": "d1",
  "name": "Rücken",
  "startTime": "2024-02-01T17:00:00Z",
  "exercises": [
    {
      "id": "d1-e1",
      "exerciseId": "ex-deadlift",
      "sets": [{ "id": "d1-s1", "weight": 140, "reps": 3, "completed": true }]
    }
  ]
}"#,
    );

    let stdout = run_ok(&env, &["finish", &workout.to_string_lossy()]);
    assert!(stdout.contains("1 new personal record(s):"), "got:\n{stdout}");
    assert!(stdout.contains("Kreuzheben"), "got:\n{stdout}");

    let stdout = run_ok(&env, &["records"]);
    assert!(stdout.contains("Kreuzheben") && stdout.contains("140 kg"), "got:\n{stdout}");
}
