use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Get a Command for duograph with no config file in play
pub fn duograph() -> Command {
    let mut cmd = cargo_bin_cmd!("duograph");
    cmd.env("DUOGRAPH_CONFIG_DIR", "/nonexistent/duograph-tests")
        .env_remove("DUOGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Get a Command for duograph reading config from `dir`
#[allow(dead_code)]
pub fn duograph_with_config(dir: &Path) -> Command {
    let mut cmd = duograph();
    cmd.env("DUOGRAPH_CONFIG_DIR", dir);
    cmd
}

/// The seven-edge weighted sample used across the directed tests
#[allow(dead_code)]
pub const SAMPLE_EDGES: [&str; 7] = ["0:1:10", "4:0:12", "1:4:15", "4:3:3", "3:1:5", "2:1:23", "3:2:7"];

/// `directed` followed by `-e` flags for every sample edge
#[allow(dead_code)]
pub fn directed_sample() -> Command {
    let mut cmd = duograph();
    cmd.arg("directed");
    for edge in SAMPLE_EDGES {
        cmd.args(["-e", edge]);
    }
    cmd
}
