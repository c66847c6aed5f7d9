//! Tests for command dispatch.

use super::*;
use crate::error::CutterError;
use crate::test_support::DirGuard;
use clap::Parser;
use serial_test::serial;
use tempfile::TempDir;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("cookiecutter").chain(args.iter().copied())).unwrap()
}

fn run(args: &[&str]) -> (Result<()>, String) {
    let mut out = Vec::new();
    let result = dispatch_to(cli(args), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
#[serial]
fn test_missing_binaries_abort_before_anything_else() {
    let temp = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp.path());

    let (result, output) = run(&["-e", "remove", "-i", "a.fq", "-f", "frags.dat", "-o", "out"]);

    let err = result.unwrap_err();
    assert!(matches!(err, CutterError::MissingBinaries(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(output.is_empty());
}

#[test]
#[serial]
fn test_missing_binaries_also_block_make_library() {
    let temp = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp.path());
    std::fs::write(temp.path().join("frags.fa"), ">s\nACGT\n").unwrap();

    let (result, _) = run(&["make_library", "-i", "frags.fa", "-o", "frags.kmers", "-l", "2"]);

    assert!(matches!(result, Err(CutterError::MissingBinaries(_))));
    assert!(!temp.path().join("frags.kmers").exists());
}

#[test]
fn test_bad_config_file_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("cookiecutter.yaml");
    std::fs::write(&config, "poll_interval_ms: 0\n").unwrap();

    let (result, _) = run(&[
        "--config",
        config.to_str().unwrap(),
        "remove",
        "-i",
        "a.fq",
        "-f",
        "frags.dat",
        "-o",
        "out",
    ]);

    let err = result.unwrap_err();
    assert!(matches!(err, CutterError::UserError(_)));
}

#[cfg(unix)]
mod with_tools {
    use super::*;
    use crate::test_support::{install_tools, write_tool};

    #[test]
    #[serial]
    fn test_echo_prints_one_line_per_unit() {
        let temp = TempDir::new().unwrap();
        install_tools(temp.path());
        let _guard = DirGuard::new(temp.path());

        let (result, output) = run(&[
            "--echo", "extractor", "-i", "a.fq", "b.fq", "c.fq", "-f", "frags.dat", "-o", "out",
        ]);

        result.unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "./extractor -f frags.dat -o out -i a.fq",
                "./extractor -f frags.dat -o out -i b.fq",
                "./extractor -f frags.dat -o out -i c.fq",
            ]
        );
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    #[serial]
    fn test_echo_rm_reads_paired() {
        let temp = TempDir::new().unwrap();
        install_tools(temp.path());
        let _guard = DirGuard::new(temp.path());

        let (result, output) = run(&[
            "rm_reads", "-1", "a_1.fq", "-2", "a_2.fq", "-f", "frags.dat", "-o", "out", "-d",
            "-N", "-e",
        ]);

        result.unwrap();
        assert_eq!(
            output.trim_end(),
            "./rm_reads -f frags.dat -o out -p 13 -l 50 -d -k 4 -c 2 -N -1 a_1.fq -2 a_2.fq"
        );
    }

    #[test]
    #[serial]
    fn test_mismatched_pairs_fail_before_commands_are_built() {
        let temp = TempDir::new().unwrap();
        install_tools(temp.path());
        let _guard = DirGuard::new(temp.path());

        let (result, output) = run(&[
            "-e", "separate", "-1", "a_1.fq", "b_1.fq", "-2", "a_2.fq", "-f", "frags.dat", "-o",
            "out",
        ]);

        let err = result.unwrap_err();
        assert!(matches!(err, CutterError::ConfigurationError(_)));
        assert_eq!(err.exit_code(), crate::exit_codes::CONFIGURATION_ERROR);
        assert!(output.is_empty());
    }

    #[test]
    #[serial]
    fn test_launch_with_wait_runs_every_unit() {
        let temp = TempDir::new().unwrap();
        install_tools(temp.path());
        let calls = temp.path().join("calls.log");
        write_tool(
            temp.path(),
            "remove",
            &format!("echo \"$*\" >> '{}'", calls.display()),
        );
        let _guard = DirGuard::new(temp.path());

        let (result, output) = run(&[
            "--wait", "remove", "-i", "a.fq", "b.fq", "c.fq", "-f", "frags.dat", "-o", "out", "-t",
            "2",
        ]);

        result.unwrap();
        assert!(output.is_empty());

        let mut lines: Vec<String> = std::fs::read_to_string(&calls)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        lines.sort();
        assert_eq!(
            lines,
            vec![
                "-f frags.dat -o out -i a.fq",
                "-f frags.dat -o out -i b.fq",
                "-f frags.dat -o out -i c.fq",
            ]
        );
    }

    #[test]
    #[serial]
    fn test_child_failures_do_not_fail_the_run() {
        let temp = TempDir::new().unwrap();
        install_tools(temp.path());
        write_tool(temp.path(), "separate", "exit 7");
        let _guard = DirGuard::new(temp.path());

        let (result, _) = run(&[
            "--wait", "separate", "-i", "a.fq", "b.fq", "-f", "frags.dat", "-o", "out",
        ]);

        result.unwrap();
    }

    #[test]
    #[serial]
    fn test_config_bin_dir_is_used() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        std::fs::create_dir(&bin).unwrap();
        install_tools(&bin);
        let config = temp.path().join("cookiecutter.yaml");
        std::fs::write(&config, format!("bin_dir: {}\n", bin.display())).unwrap();

        let (result, output) = run(&[
            "--config",
            config.to_str().unwrap(),
            "-e",
            "remove",
            "-i",
            "a.fq",
            "-f",
            "frags.dat",
            "-o",
            "out",
        ]);

        result.unwrap();
        assert!(output.starts_with(&bin.join("remove").display().to_string()));
    }

    #[test]
    #[serial]
    fn test_make_library_writes_table() {
        let temp = TempDir::new().unwrap();
        install_tools(temp.path());
        std::fs::write(temp.path().join("frags.fa"), ">seq1\nATCG\n").unwrap();
        let _guard = DirGuard::new(temp.path());

        let (result, _) = run(&["make_library", "-i", "frags.fa", "-o", "frags.kmers", "-l", "2"]);

        result.unwrap();
        let table = std::fs::read_to_string(temp.path().join("frags.kmers")).unwrap();
        assert_eq!(table, "AT\t2\nCG\t2\nGA\t1\nTC\t1\n");
    }
}
