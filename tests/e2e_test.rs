/// End-to-end tests for the CLI
///
/// Most tests feed a saved database through `--database` so no make is needed.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// SHA-256 of "abc"
const ABC_DIGEST: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// SHA-256 of the empty input
const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

const DATABASE: &str = "\
# Files
app: main.o util.o
main.o: main.c common.h
util.o: util.c
";

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a database dump into `dir` and return its path.
fn write_database(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("database.txt");
    fs::write(&path, content).unwrap();
    path
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), DATABASE);

        cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "app"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("make-prereqs").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("make-prereqs")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 1: Target not found in the database
    #[test]
    fn test_exit_code_target_not_found() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), DATABASE);

        cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "install"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "Target 'install' not found in the Makefile.",
            ));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("make-prereqs")
            .args(["--invalid-option", "app"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing target argument
    #[test]
    fn test_exit_code_missing_target() {
        cargo_bin_cmd!("make-prereqs").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("make-prereqs")
            .args(["--format", "invalid_format", "app"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - make program cannot be run
    #[test]
    fn test_exit_code_make_unavailable() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("make-prereqs")
            .args([
                "-C",
                &path_arg(dir.path()),
                "--make",
                "/nonexistent/bin/make-prereqs-no-make",
                "app",
            ])
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "Failed to run '/nonexistent/bin/make-prereqs-no-make'",
            ));
    }

    /// Exit code 3: Application error - non-existent make directory
    #[test]
    fn test_exit_code_nonexistent_directory() {
        cargo_bin_cmd!("make-prereqs")
            .args(["-C", "/nonexistent/path/that/does/not/exist", "app"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Directory does not exist"));
    }

    /// Exit code 3: Application error - database dump cannot be read
    #[test]
    fn test_exit_code_missing_database() {
        cargo_bin_cmd!("make-prereqs")
            .args(["--database", "/nonexistent/database.txt", "app"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read make database dump"));
    }

    /// Exit code 3: Application error - dependency cycle
    #[test]
    fn test_exit_code_dependency_cycle() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), "a: b\nb: a\n");

        cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "-r", "a"])
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "Dependency cycle detected: a -> b -> a",
            ));
    }
}

mod listing_tests {
    use super::*;

    #[test]
    fn test_direct_prerequisites() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), DATABASE);

        cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "app"])
            .assert()
            .success()
            .stdout("main.o\nutil.o\n");
    }

    #[test]
    fn test_recursive_prerequisites() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), DATABASE);

        cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "--recursive", "app"])
            .assert()
            .success()
            .stdout("main.c\ncommon.h\nutil.c\n");
    }

    #[test]
    fn test_recursive_wide_project_is_not_size_limited() {
        let dir = TempDir::new().unwrap();
        let mut content = String::from("all:");
        for n in 0..2_500 {
            content.push_str(&format!(" obj/{}.o", n));
        }
        content.push('\n');
        let headers: String = (0..400).map(|k| format!(" inc/h{}.h", k)).collect();
        for n in 0..2_500 {
            content.push_str(&format!("obj/{n}.o: src/{n}.c{headers}\n"));
        }
        let database = write_database(dir.path(), &content);

        let output = cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "-r", "all"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 2_900);
        assert_eq!(stdout.lines().next(), Some("src/0.c"));
    }

    #[test]
    fn test_max_nodes_flag_limits_expansion() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), DATABASE);

        cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "-r", "--max-nodes", "3", "app"])
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "Dependency tree for 'app' exceeds 3 nodes",
            ));
    }

    #[test]
    fn test_target_without_prerequisites_prints_nothing() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), "clean:\n");

        cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "-r", "clean"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_database_from_stdin() {
        cargo_bin_cmd!("make-prereqs")
            .args(["--database", "-", "app"])
            .write_stdin(DATABASE)
            .assert()
            .success()
            .stdout("main.o\nutil.o\n");
    }

    #[test]
    fn test_debug_prints_tree_first() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), DATABASE);

        cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "-r", "-d", "app"])
            .assert()
            .success()
            .stdout(
                "\
app
├── main.o
│   ├── main.c
│   └── common.h
└── util.o
    └── util.c

main.c
common.h
util.c
",
            );
    }

    #[test]
    fn test_json_format() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), DATABASE);

        let output = cargo_bin_cmd!("make-prereqs")
            .args(["--database", &path_arg(&database), "--format", "json", "-r", "app"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["target"], "app");
        assert_eq!(value["recursive"], true);
        assert_eq!(
            value["leaves"],
            serde_json::json!(["main.c", "common.h", "util.c"])
        );
        assert!(value.get("hash").is_none());
    }
}

mod hashing_tests {
    use super::*;

    /// Project directory with main.c = "ab" and util.c = "c"
    fn create_sources(dir: &Path) {
        fs::write(dir.join("main.c"), "ab").unwrap();
        fs::write(dir.join("util.c"), "c").unwrap();
    }

    #[test]
    fn test_hash_of_sorted_leaf_contents() {
        let dir = TempDir::new().unwrap();
        create_sources(dir.path());
        let database = write_database(dir.path(), "app: util.c main.c\n");

        cargo_bin_cmd!("make-prereqs")
            .args([
                "-C",
                &path_arg(dir.path()),
                "--database",
                &path_arg(&database),
                "--hash",
                "app",
            ])
            .assert()
            .success()
            .stdout(format!("{}\n", ABC_DIGEST));
    }

    #[test]
    fn test_hash_resolves_leaves_from_current_directory() {
        let dir = TempDir::new().unwrap();
        create_sources(dir.path());
        let database = write_database(dir.path(), "app: main.c util.c\n");

        cargo_bin_cmd!("make-prereqs")
            .current_dir(dir.path())
            .args(["--database", &path_arg(&database), "--hash", "app"])
            .assert()
            .success()
            .stdout(format!("{}\n", ABC_DIGEST));
    }

    #[test]
    fn test_hash_ignores_leaf_order_in_makefile() {
        let dir = TempDir::new().unwrap();
        create_sources(dir.path());
        let forward = dir.path().join("forward.txt");
        let reverse = dir.path().join("reverse.txt");
        fs::write(&forward, "app: main.c util.c\n").unwrap();
        fs::write(&reverse, "app: util.c main.c\n").unwrap();

        for database in [forward, reverse] {
            cargo_bin_cmd!("make-prereqs")
                .args([
                    "-C",
                    &path_arg(dir.path()),
                    "--database",
                    &path_arg(&database),
                    "--hash",
                    "app",
                ])
                .assert()
                .success()
                .stdout(format!("{}\n", ABC_DIGEST));
        }
    }

    #[test]
    fn test_missing_file_is_skipped_with_warning() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), "app: gone.c\n");

        cargo_bin_cmd!("make-prereqs")
            .args([
                "-C",
                &path_arg(dir.path()),
                "--database",
                &path_arg(&database),
                "--hash",
                "app",
            ])
            .assert()
            .code(0)
            .stdout(format!("{}\n", EMPTY_DIGEST))
            .stderr(predicate::str::contains("File 'gone.c' not found."));
    }

    #[test]
    fn test_missing_file_fails_with_strict() {
        let dir = TempDir::new().unwrap();
        let database = write_database(dir.path(), "app: gone.c\n");

        cargo_bin_cmd!("make-prereqs")
            .args([
                "-C",
                &path_arg(dir.path()),
                "--database",
                &path_arg(&database),
                "--hash",
                "--strict",
                "app",
            ])
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("gone.c").and(predicate::str::contains("not found")));
    }

    #[test]
    fn test_hash_with_debug_prints_tree_then_digest() {
        let dir = TempDir::new().unwrap();
        create_sources(dir.path());
        let database = write_database(dir.path(), "app: main.c util.c\n");

        cargo_bin_cmd!("make-prereqs")
            .args([
                "-C",
                &path_arg(dir.path()),
                "--database",
                &path_arg(&database),
                "--hash",
                "--debug",
                "app",
            ])
            .assert()
            .success()
            .stdout(format!("app\n├── main.c\n└── util.c\n\n{}\n", ABC_DIGEST));
    }
}

mod real_make_tests {
    use super::*;
    use std::process::Command;

    fn gnu_make_available() -> bool {
        Command::new("make")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).contains("GNU Make"))
            .unwrap_or(false)
    }

    #[test]
    fn test_reads_database_from_make() {
        if !gnu_make_available() {
            eprintln!("skipping: GNU make is not installed");
            return;
        }

        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("Makefile"),
            "app: main.o\n\ttouch app\n\nmain.o: main.c\n\ttouch main.o\n",
        )
        .unwrap();
        fs::write(dir.path().join("main.c"), "int main(void) { return 0; }\n").unwrap();

        cargo_bin_cmd!("make-prereqs")
            .args(["-C", &path_arg(dir.path()), "-r", "app"])
            .assert()
            .success()
            .stdout(predicate::str::contains("main.c"));
    }
}
