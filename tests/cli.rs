#[cfg(test)]
mod test {
    use std::{
        io::Write,
        path::Path,
        process::{Command, Output},
    };

    use mmr_outputs_encoder::compute_outputs;
    use tempfile::NamedTempFile;

    const OUTPUT: &str = r#"{
        "block_n_plus_one_parent_hash_low": "1",
        "block_n_plus_one_parent_hash_high": "2",
        "block_n_minus_r_plus_one_parent_hash_low": "3",
        "block_n_minus_r_plus_one_parent_hash_high": "4",
        "mmr_last_root_poseidon": "5",
        "mmr_last_root_keccak_low": "6",
        "mmr_last_root_keccak_high": "7",
        "mmr_last_len": 8,
        "new_mmr_root_poseidon": "9",
        "new_mmr_root_keccak_low": "10",
        "new_mmr_root_keccak_high": "11",
        "new_mmr_len": 12
    }"#;

    fn outputs_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn run(args: &[&Path]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_compute_outputs"))
            .args(args)
            .env("RUST_LOG", "error")
            .output()
            .unwrap()
    }

    #[test]
    fn prints_single_hex_line() {
        let file = outputs_file(&format!("[{OUTPUT}, {OUTPUT}]"));
        let output = run(&[file.path()]);

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout, format!("{}\n", compute_outputs(file.path()).unwrap()));
        assert_eq!(stdout.lines().count(), 1);
    }

    #[test]
    fn malformed_record_exits_with_error_and_no_stdout() {
        let malformed = OUTPUT.replace(r#""mmr_last_root_poseidon": "5""#, r#""mmr_last_root_poseidon": "abc""#);
        let file = outputs_file(&format!("[{OUTPUT}, {malformed}]"));
        let output = run(&[file.path()]);

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Record 1"), "{stderr}");
        assert!(stderr.contains("mmr_last_root_poseidon"), "{stderr}");
    }

    #[test]
    fn missing_file_exits_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&[&dir.path().join("outputs.json")]);

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn requires_exactly_one_argument() {
        let file = outputs_file(&format!("[{OUTPUT}]"));

        let output = run(&[]);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());

        let output = run(&[file.path(), Path::new("--output"), Path::new("out.txt")]);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
    }
}
