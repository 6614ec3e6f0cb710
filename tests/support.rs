use std::ffi::OsStr;
use std::fmt::Write as _;
use std::path::Path;
use std::process::{Command, Output};

/// Interface counter that ramps by 100 per half second between idle phases.
pub const RAMP: [u64; 17] = [
    0, 10, 20, 120, 220, 320, 420, 520, 620, 720, 820, 920, 1020, 1120, 1220, 1220, 1225,
];

/// Half a second in nanoseconds, the spacing of [`RAMP`] samples.
pub const RAMP_STEP_NS: u64 = 500_000_000;

/// Writes `measure.cfg` and `results.csv` for the ramp scenario into `dir`.
///
/// # Errors
///
/// Returns an error when the files cannot be written.
pub fn write_ramp_inputs(dir: &Path) -> Result<(), String> {
    let mut csv = String::from("iteration,time,interface,metric,value\n");
    let mut time: u64 = 0;
    for (idx, value) in RAMP.iter().enumerate() {
        writeln!(csv, "{idx},{time},eth0,rx_packets,{value}").map_err(|err| err.to_string())?;
        writeln!(csv, "{idx},{time},eth0,tx_bytes,{}", 4_000_u64.saturating_mul(*value))
            .map_err(|err| err.to_string())?;
        time = time.saturating_add(RAMP_STEP_NS);
    }
    std::fs::write(dir.join("results.csv"), csv)
        .map_err(|err| format!("write results failed: {}", err))?;
    std::fs::write(
        dir.join("measure.cfg"),
        "eth0 rx_packets\neth0 tx_bytes\neth1 rx_packets\n",
    )
    .map_err(|err| format!("write measure config failed: {}", err))
}

/// Runs the binary inside `dir` so no stray default config is picked up.
///
/// # Errors
///
/// Returns an error when the binary cannot be started.
pub fn run_analyze<I, S>(dir: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = analyze_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env("STATMON_LOG", "error")
        .env_remove("NO_COLOR")
        .output()
        .map_err(|err| format!("run statmon-analyze failed: {}", err))
}

/// Lines written to stdout.
#[must_use]
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn analyze_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_statmon-analyze").map_or_else(
        || Err("CARGO_BIN_EXE_statmon-analyze missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
