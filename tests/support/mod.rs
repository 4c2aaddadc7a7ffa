use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for airroute with no logging overrides from the caller
pub fn airroute() -> Command {
    let mut cmd = cargo_bin_cmd!("airroute");
    cmd.env_remove("RUST_LOG")
        .env_remove("AIRROUTE_LOG")
        .env_remove("AIRROUTE_DATA");
    cmd
}

/// Small Georgia-centred network.
///
/// ATL reaches AGS directly (400) or through SAV (215 + 120).
pub const FLIGHTS: &str = "\
Origin_airport,Destination_airport,Origin_city,Destination_city,Distance,Cost
ATL,SAV,\"Atlanta, GA\",\"Savannah, GA\",215,80
ATL,BOS,\"Atlanta, GA\",\"Boston, MA\",946,120
BOS,ATL,\"Boston, MA\",\"Atlanta, GA\",946,110
SAV,AGS,\"Savannah, GA\",\"Augusta, GA\",120,50
ATL,AGS,\"Atlanta, GA\",\"Augusta, GA\",400,200
BOS,JFK,\"Boston, MA\",\"New York, NY\",187,90
";

/// Write `contents` as `flights.csv` under `dir`
pub fn write_flights(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("flights.csv");
    fs::write(&path, contents).unwrap();
    path
}
