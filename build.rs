use std::process::Command;
use chrono::TimeZone;

/// Short commit hash of the working tree, or "unknown" outside git
fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Local build time with zone abbreviation, e.g. "2026-10-14 09:30:00 PDT"
fn build_timestamp() -> String {
    let now = chrono::Utc::now();
    match iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<chrono_tz::Tz>().ok())
    {
        Some(tz) => tz
            .from_utc_datetime(&now.naive_utc())
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string(),
        None => now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    }
}

fn main() {
    println!("cargo:rustc-env=BUILD_HASH={}", git_hash());
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp());

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
