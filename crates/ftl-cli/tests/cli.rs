use assert_cmd::Command;
use predicates::prelude::*;

fn ftl() -> Command {
    Command::cargo_bin("ftl").unwrap()
}

#[test]
fn test_duty_text_output() {
    ftl()
        .args(["duty", "08:00", "17:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("07:00"))
        .stdout(predicate::str::contains("17:15"))
        .stdout(predicate::str::contains("10:15 (compliant)"));
}

#[test]
fn test_duty_accepts_digit_form() {
    ftl()
        .args(["duty", "800", "1700"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10:15"));
}

#[test]
fn test_duty_midnight_rollover() {
    ftl()
        .args(["duty", "23:30", "00:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:30 (+1d)"))
        .stdout(predicate::str::contains("2:00"));
}

#[test]
fn test_duty_over_ceiling_has_no_next_departure() {
    ftl()
        .args(["duty", "06:00", "20:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("over ceiling by 1:15"))
        .stdout(predicate::str::contains("—"));
}

#[test]
fn test_duty_json_output() {
    let output = ftl()
        .args(["--json", "duty", "08:00", "17:00"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["window"]["start"]["clock"], "07:00");
    assert_eq!(json["window"]["end"]["clock"], "17:15");
    assert_eq!(json["window"]["length"], 615);
    assert_eq!(json["status"], "compliant");
}

#[test]
fn test_duty_invalid_time_fails() {
    ftl()
        .args(["duty", "25:00", "17:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid departure"))
        .stderr(predicate::str::contains("hour must be 0-23"));
}

#[test]
fn test_duty_blank_field_is_missing_input() {
    ftl()
        .args(["duty", "08:00", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing input: arrival"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_duty_custom_buffers() {
    ftl()
        .args(["duty", "08:00", "17:00", "--pre", "45", "--post", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("07:15"))
        .stdout(predicate::str::contains("17:30"));
}

#[test]
fn test_split_over_ceiling() {
    ftl()
        .args(["split", "07:00", "11:00", "18:00", "23:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7:00"))
        .stdout(predicate::str::contains("16:30"))
        .stdout(predicate::str::contains("over ceiling by 0:45"));
}

#[test]
fn test_split_short_ground_rest_warns() {
    ftl()
        .args(["split", "07:00", "10:00", "15:00", "18:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14:00"))
        .stdout(predicate::str::contains("split-duty extension does not apply"));
}

#[test]
fn test_split_json_over_by() {
    let output = ftl()
        .args(["split", "07:00", "11:00", "18:00", "23:00", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ground_rest"], 420);
    assert_eq!(json["allowable_duty"], 990);
    assert_eq!(json["over_by"], 45);
    assert_eq!(json["split_eligible"], true);
}

#[test]
fn test_split_reports_every_missing_field() {
    ftl()
        .args(["split", "07:00", "", "18:00", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "missing input: first landing, last arrival",
        ));
}

#[test]
fn test_rest_deemed() {
    ftl()
        .args(["rest", "--duty-end", "21:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deemed Rest"))
        .stdout(predicate::str::contains("07:00 (+1d)"))
        .stdout(predicate::str::contains("09:30 (+1d)"));
}

#[test]
fn test_rest_assumed() {
    ftl()
        .args(["rest", "--duty-end", "10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assumed Rest"))
        .stdout(predicate::str::contains("06:00 (+1d)"));
}

#[test]
fn test_rest_ftl_extension() {
    ftl()
        .args(["rest", "--duty-end", "21:00", "--ftl-extension"])
        .assert()
        .success()
        .stdout(predicate::str::contains("08:00 (+1d)"));
}

#[test]
fn test_rest_split_duty_extension() {
    ftl()
        .args([
            "rest",
            "--duty-end",
            "22:00",
            "--split-duty-extension",
            "--split-duty-length",
            "15.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1:30"))
        .stdout(predicate::str::contains("09:30 (+1d)"));
}

#[test]
fn test_rest_from_landing() {
    ftl()
        .args(["rest", "--landing", "19:50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deemed Rest"))
        .stdout(predicate::str::contains("20:05"));
}

#[test]
fn test_rest_with_date_anchor() {
    ftl()
        .args(["--date", "2026-10-19", "rest", "--duty-end", "21:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-10-20 07:00"));
}

#[test]
fn test_rest_requires_duty_end_or_landing() {
    ftl().args(["rest"]).assert().failure();
}

#[test]
fn test_rest_duty_end_conflicts_with_landing() {
    ftl()
        .args(["rest", "--duty-end", "21:00", "--landing", "20:00"])
        .assert()
        .failure();
}

#[test]
fn test_rest_rejects_oversized_split_duty_length() {
    ftl()
        .args([
            "rest",
            "--duty-end",
            "21:00",
            "--split-duty-extension",
            "--split-duty-length",
            "1e20",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid split duty length"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_rest_rejects_oversized_split_duty_length_with_date() {
    ftl()
        .args([
            "--date",
            "2026-01-01",
            "rest",
            "--duty-end",
            "21:00",
            "--split-duty-extension",
            "--split-duty-length",
            "1e10",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid split duty length"));
}

#[test]
fn test_rest_rejects_non_finite_split_duty_length() {
    ftl()
        .args([
            "rest",
            "--duty-end",
            "21:00",
            "--split-duty-extension",
            "--split-duty-length",
            "NaN",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid split duty length"));
}

#[test]
fn test_rest_accepts_split_duty_length_at_bound() {
    // 21:00 + 10h + (48h - 14h) = 17:00 two days on.
    ftl()
        .args([
            "--date",
            "2026-01-01",
            "rest",
            "--duty-end",
            "21:00",
            "--split-duty-extension",
            "--split-duty-length",
            "48",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-01-03 17:00"));
}
