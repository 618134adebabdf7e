use assert_cmd::Command;
use predicates::prelude::predicate::str;

macro_rules! fixture {
    ($name:literal) => {
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/", $name)
    };
}

fn day(name: &str, input: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.args(["--input", input]);
    cmd
}

#[test]
fn d01_output_right_answer() {
    day("d01", fixture!("d01.txt"))
        .assert()
        .success()
        .stdout(str::contains("Part 1: 7"))
        .stdout(str::contains("Part 2: 5"));
}

#[test]
fn d02_output_right_answer() {
    day("d02", fixture!("d02.txt"))
        .assert()
        .success()
        .stdout(str::contains("Part 1: 150"))
        .stdout(str::contains("Part 2: 900"));
}

#[test]
fn d03_output_right_answer() {
    day("d03", fixture!("d03.txt"))
        .assert()
        .success()
        .stdout(str::contains("Part 1: 198"))
        .stdout(str::contains("Part 2: 230"));
}

#[test]
fn d04_output_right_answer() {
    day("d04", fixture!("d04.txt"))
        .assert()
        .success()
        .stdout(str::contains("Part 1: 4512"))
        .stdout(str::contains("Part 2: 1924"));
}

#[test]
fn d05_output_right_answer() {
    day("d05", fixture!("d05.txt"))
        .assert()
        .success()
        .stdout(str::contains("Part 1: 5"))
        .stdout(str::contains("Part 2: 12"));
}

#[test]
fn json_answer() {
    day("d04", fixture!("d04.txt"))
        .arg("--json")
        .assert()
        .success()
        .stdout(str::contains(
            r#"{"type":"answer","data":{"part1":"4512","part2":"1924"}}"#,
        ));
}

#[test]
fn missing_input() {
    day("d05", fixture!("missing.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(str::contains("missing.txt: input unavailable"));
}

#[test]
fn empty_input() {
    day("d01", fixture!("empty.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(str::contains("empty.txt: input is empty"));
}

#[test]
fn no_winner() {
    day("d04", fixture!("d04-no-winner.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(str::contains("no board won after 3 calls"));
}

#[test]
fn malformed_record() {
    day("d02", fixture!("d02-invalid.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(str::contains("d02-invalid.txt:2:1: malformed record"))
        .stderr(str::contains("invalid command `sideways`"));
}

#[test]
fn json_error() {
    day("d04", fixture!("d04-no-winner.txt"))
        .arg("--json")
        .assert()
        .failure()
        .code(1)
        .stdout(str::contains(r#"{"type":"message","data":{"kind":"error","#));
}

#[test]
fn out_of_bounds() {
    day("d05", fixture!("d05-out-of-bounds.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(str::contains("d05-out-of-bounds.txt: failed"))
        .stderr(str::contains("point 3,1000 is outside of the 1000x1000 diagram"));
}

#[test]
fn unsupported_slope() {
    day("d05", fixture!("d05-slope.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(str::contains("d05-slope.txt:2:1: malformed record"))
        .stderr(str::contains("line 0,0 -> 2,1 is neither straight nor diagonal"));
}
