use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("tidytree").unwrap()
}

#[test]
fn rejects_unknown_indent_type_before_touching_files() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("dirty.txt");
    fs::write(&file, "Hello   \r\nWorld").unwrap();

    cmd()
        .args(["--indent-type", "bogus"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(contains("indent type"));

    assert_eq!(fs::read(&file).unwrap(), b"Hello   \r\nWorld");
}

#[test]
fn normalizes_a_tree_in_place() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src")).unwrap();
    let top = tmp.path().join("readme.txt");
    let nested = tmp.path().join("src/code.txt");
    fs::write(&top, "Hello   \r\nWorld").unwrap();
    fs::write(&nested, "    indented\n\n\n\n\nend\n").unwrap();

    // The run summary shows without --verbose.
    cmd()
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(contains("2 file(s) examined, 2 rewritten"));

    assert_eq!(fs::read(&top).unwrap(), b"Hello\nWorld\n");
    assert_eq!(fs::read(&nested).unwrap(), b"\tindented\n\n\nend\n");
}

#[test]
fn converts_to_spaces_when_asked() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("code.txt");
    fs::write(&file, "\tHello\n\t\tW\to    rld\n").unwrap();

    cmd()
        .args(["-i", "spaces", "-w", "4"])
        .arg(&file)
        .assert()
        .success();

    assert_eq!(fs::read(&file).unwrap(), b"    Hello\n        W\to    rld\n");
}

#[test]
fn leaves_makefiles_alone() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("Makefile");
    fs::write(&file, "all:\n\tcc -o x x.c   \n").unwrap();

    cmd().arg(tmp.path()).assert().success();

    assert_eq!(fs::read(&file).unwrap(), b"all:\n\tcc -o x x.c   \n");
}

#[test]
fn exclude_globs_are_honored() {
    let tmp = TempDir::new().unwrap();
    let skipped = tmp.path().join("skip.gen");
    let kept = tmp.path().join("keep.txt");
    fs::write(&skipped, "dirty   \n").unwrap();
    fs::write(&kept, "dirty   \n").unwrap();

    cmd()
        .args(["--exclude", "*.gen"])
        .arg(tmp.path())
        .assert()
        .success();

    assert_eq!(fs::read(&skipped).unwrap(), b"dirty   \n");
    assert_eq!(fs::read(&kept).unwrap(), b"dirty\n");
}

#[test]
fn preset_from_presets_toml_is_applied() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config/tidytree");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("presets.toml"),
        "[two-space]\nindent-type = \"spaces\"\nindent-width = 2\n",
    )
    .unwrap();

    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("code.txt");
    fs::write(&file, "\thello\n").unwrap();

    cmd()
        .env("HOME", home.path())
        .args(["--preset", "two-space"])
        .arg(&file)
        .assert()
        .success();

    assert_eq!(fs::read(&file).unwrap(), b"  hello\n");
}

#[test]
fn unknown_preset_is_fatal_before_touching_files() {
    let home = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("dirty.txt");
    fs::write(&file, "dirty   \n").unwrap();

    cmd()
        .env("HOME", home.path())
        .args(["--preset", "no-such-preset"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(contains("No preset named"));

    assert_eq!(fs::read(&file).unwrap(), b"dirty   \n");
}

#[test]
fn verbose_reports_what_was_fixed() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("dirty.txt");
    fs::write(&file, "Hello   \r\nWorld").unwrap();

    cmd()
        .arg("-v")
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(contains("fixed \\r\\n line endings"))
        .stderr(contains("trimmed trailing whitespace"))
        .stderr(contains("added newline at end of file"));
}

#[test]
fn run_succeeds_even_when_a_file_is_unreadable() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("single.txt");
    fs::write(&file, "x").unwrap();
    let missing = tmp.path().join("gone.txt");

    // A nonexistent file root is a per-file read error, not a fatal one.
    cmd()
        .arg(&missing)
        .arg(&file)
        .assert()
        .success()
        .stderr(contains("Unable to read"));

    assert_eq!(fs::read(&file).unwrap(), b"x\n");
}
