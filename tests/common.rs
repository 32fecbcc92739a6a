#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gclk() -> Command {
    cargo_bin_cmd!("geoclock")
}

/// Institution reference point used by all integration tests.
pub const INST_LAT: &str = "5.669533";
pub const INST_LON: &str = "-0.196003";
pub const RADIUS: &str = "100";

/// A point ~1.1 km north of the institution (well outside RADIUS).
pub const FAR_LAT: &str = "5.679533";

/// Common global args: DB override plus explicit geofence injection.
pub fn base_args(db_path: &str) -> Vec<String> {
    vec![
        "--db".into(),
        db_path.into(),
        "--test".into(),
        "--inst-lat".into(),
        INST_LAT.into(),
        "--inst-lon".into(),
        INST_LON.into(),
        "--radius".into(),
        RADIUS.into(),
    ]
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_geoclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and register the two users most tests need:
/// 'ada' (staff) and 'efua' (admin).
pub fn init_db_with_users(db_path: &str) {
    let mut args = base_args(db_path);
    args.push("init".into());
    gclk().args(&args).assert().success();

    add_user(db_path, "Ada Mensah", "ada", "staff");
    add_user(db_path, "Efua Owusu", "efua", "admin");
}

pub fn add_user(db_path: &str, name: &str, username: &str, role: &str) {
    let mut args = base_args(db_path);
    args.extend(
        [
            "user", "--add", "--name", name, "--username", username, "--role", role,
        ]
        .map(String::from),
    );
    gclk().args(&args).assert().success();
}

/// Seed an attendance row directly through the library DB API, so tests
/// can control the clock_in timestamp (the CLI always stamps "now").
pub fn seed_session(db_path: &str, user_id: i64, clock_in: &str, clock_out: Option<&str>) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    geoclock::db::initialize::init_db(&conn).expect("init db");
    conn.execute(
        "INSERT INTO attendance_logs (user_id, clock_in, clock_out, lat_in, lon_in)
         VALUES (?1, ?2, ?3, 5.669533, -0.196003)",
        rusqlite::params![user_id, clock_in, clock_out],
    )
    .expect("seed session");
}
