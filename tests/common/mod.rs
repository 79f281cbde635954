use std::fs;
use std::path::Path;
use std::process::{Command, Output};

pub fn run_probe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dbc-probe"))
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run dbc-probe with args {:?}: {e}", args))
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// 1-based line of the only line in the probe source containing `needle`.
pub fn probe_line(needle: &str) -> usize {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("main.rs");
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read `{}`: {e}", path.display()));

    let hits: Vec<usize> = source
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(needle))
        .map(|(idx, _)| idx + 1)
        .collect();
    assert_eq!(hits.len(), 1, "expected exactly one line with `{needle}`: {hits:?}");
    hits[0]
}
