//! Integration tests for the balance-checker binary

#[cfg(test)]
mod cli_tests {
    use serde_json::Value;
    use std::io::Write;
    use std::path::PathBuf;
    use std::process::{Command, Stdio};

    fn fixture(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    fn run_checker(args: &[&str], stdin: Option<&str>) -> (i32, String, String) {
        let mut child = Command::new(env!("CARGO_BIN_EXE_balance-checker"))
            .args(args)
            .arg("--no-color")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to start balance-checker");

        if let Some(mut pipe) = child.stdin.take() {
            if let Some(input) = stdin {
                pipe.write_all(input.as_bytes()).unwrap();
            }
        }

        let output = child.wait_with_output().unwrap();
        (
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }

    #[test]
    fn test_text_report_for_two_files() {
        let (code, stdout, stderr) =
            run_checker(&[&fixture("march.json"), &fixture("april.json")], None);

        assert_eq!(code, 0, "stderr: {}", stderr);
        assert!(stderr.is_empty(), "No error expected: {}", stderr);
        assert!(stdout.contains("Field Filters (7 of 7 fields active)"));
        assert!(stdout.contains("✗ account.balance: Inconsistent"));
        assert!(stdout.contains("Item 1: 1300.5"));
        assert!(stdout.contains("✓ account.currency: Consistent \"EUR\""));
        assert!(stdout.contains("✗ entries.amount: Inconsistent"));
        assert!(stdout.contains("Item 0: [100,200]"));
        assert!(stdout.contains("✗ note: Inconsistent"));
        assert!(stdout.contains("Item 0: (absent)"));
        assert!(stdout.contains("3 inconsistent field(s) (4 consistent, 2 documents)"));
    }

    #[test]
    fn test_check_flag_sets_exit_status() {
        let (code, _, _) = run_checker(
            &[&fixture("march.json"), &fixture("april.json"), "--check", "--quiet"],
            None,
        );
        assert_eq!(code, 1);

        let (code, stdout, _) = run_checker(
            &[
                &fixture("march.json"),
                &fixture("march.json"),
                "--check",
                "--quiet",
            ],
            None,
        );
        assert_eq!(code, 0);
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_ignored_fields_are_not_compared() {
        let (_, stdout, _) = run_checker(
            &[
                &fixture("march.json"),
                &fixture("april.json"),
                "--ignore",
                "note",
                "-i",
                "account.balance",
                "--only-inconsistent",
            ],
            None,
        );

        assert!(stdout.contains("Field Filters (5 of 7 fields active)"));
        assert!(stdout.contains("○ note (ignored)"));
        assert!(!stdout.contains("✗ note"));
        assert!(!stdout.contains("✓ closed"));
        assert!(stdout.contains("✗ entries.amount: Inconsistent"));
    }

    #[test]
    fn test_parse_error_reported_and_loading_continues() {
        let (code, stdout, stderr) = run_checker(
            &[
                &fixture("march.json"),
                &fixture("broken.json"),
                &fixture("april.json"),
            ],
            None,
        );

        assert_eq!(code, 0);
        assert!(stderr.contains("✗ Error parsing broken.json: "), "stderr: {}", stderr);
        assert!(stdout.contains("2 documents"));
    }

    #[test]
    fn test_fail_fast_aborts() {
        let (code, stdout, stderr) = run_checker(
            &[&fixture("broken.json"), &fixture("march.json"), "--fail-fast"],
            None,
        );

        assert_eq!(code, 2);
        assert!(stdout.is_empty());
        assert!(stderr.contains("Error parsing broken.json"));
    }

    #[test]
    fn test_json_output_with_inline_and_stdin_documents() {
        let (code, stdout, stderr) = run_checker(
            &[
                "--json",
                r#"{"name": "John", "age": 30}"#,
                "--stdin",
                "--format",
                "json",
            ],
            Some(r#"{"name": "John", "age": 31}"#),
        );

        assert_eq!(code, 0, "stderr: {}", stderr);
        let report: Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(report["summary"]["document_count"], 2);
        assert_eq!(report["fields"].as_array().unwrap().len(), 2);
        assert_eq!(report["comparisons"][0]["path"], "age");
        assert_eq!(report["comparisons"][0]["is_consistent"], false);
        assert_eq!(report["comparisons"][0]["values"][1]["value"], 31);
        assert_eq!(report["comparisons"][1]["reference"], "\"John\"");
    }

    #[test]
    fn test_show_documents_lists_files() {
        let (_, stdout, _) = run_checker(
            &[&fixture("march.json"), &fixture("april.json"), "--show-documents"],
            None,
        );

        assert!(stdout.contains("Balance Files (2)"));
        assert!(stdout.contains("1. march.json (3 fields)"));
        assert!(stdout.contains("2. april.json (4 fields)"));
    }

    #[test]
    fn test_missing_input() {
        let (code, _, stderr) = run_checker(&["does-not-exist.json"], None);
        assert_eq!(code, 2);
        assert!(stderr.contains("Input not found"));
    }
}
