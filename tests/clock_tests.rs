use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{FAR_LAT, INST_LAT, INST_LON, base_args, gclk, init_db_with_users, setup_test_db};

fn run(db: &str, tail: &[&str]) -> assert_cmd::Command {
    let mut cmd = gclk();
    let mut args = base_args(db);
    args.extend(tail.iter().map(|s| s.to_string()));
    cmd.args(args);
    cmd
}

#[test]
fn test_clock_in_out_cycle() {
    let db = setup_test_db("clock_cycle");
    init_db_with_users(&db);

    run(&db, &["in", "ada", "--lat", INST_LAT, "--lon", INST_LON])
        .assert()
        .success()
        .stdout(contains("clocked in"));

    // session is open
    run(&db, &["logs", "ada", "--as", "efua"])
        .assert()
        .success()
        .stdout(contains("(open)"));

    run(&db, &["out", "ada", "--lat", INST_LAT, "--lon", INST_LON])
        .assert()
        .success()
        .stdout(contains("clocked out"));

    // and now closed
    run(&db, &["logs", "ada", "--as", "efua"])
        .assert()
        .success()
        .stdout(contains("(open)").not());
}

#[test]
fn test_clock_in_outside_radius_rejected() {
    let db = setup_test_db("clock_outside");
    init_db_with_users(&db);

    run(&db, &["in", "ada", "--lat", FAR_LAT, "--lon", INST_LON])
        .assert()
        .failure()
        .stderr(contains("Outside allowed location radius"));

    // nothing was written
    run(&db, &["logs", "ada", "--as", "efua"])
        .assert()
        .success()
        .stdout(contains("No attendance sessions found."));
}

#[test]
fn test_clock_in_without_coordinates_rejected() {
    let db = setup_test_db("clock_no_coords");
    init_db_with_users(&db);

    run(&db, &["in", "ada"])
        .assert()
        .failure()
        .stderr(contains("no coordinates provided"));
}

#[test]
fn test_clock_out_without_active_session_rejected() {
    let db = setup_test_db("clock_no_active");
    init_db_with_users(&db);

    run(&db, &["out", "ada", "--lat", INST_LAT, "--lon", INST_LON])
        .assert()
        .failure()
        .stderr(contains("No active clock-in"));
}

#[test]
fn test_clock_out_outside_radius_keeps_session_open() {
    let db = setup_test_db("clock_out_outside");
    init_db_with_users(&db);

    run(&db, &["in", "ada", "--lat", INST_LAT, "--lon", INST_LON])
        .assert()
        .success();

    run(&db, &["out", "ada", "--lat", FAR_LAT, "--lon", INST_LON])
        .assert()
        .failure()
        .stderr(contains("Outside allowed location radius"));

    run(&db, &["logs", "ada", "--as", "efua"])
        .assert()
        .success()
        .stdout(contains("(open)"));
}

#[test]
fn test_clock_in_unknown_user_rejected() {
    let db = setup_test_db("clock_unknown_user");
    init_db_with_users(&db);

    run(&db, &["in", "ghost", "--lat", INST_LAT, "--lon", INST_LON])
        .assert()
        .failure()
        .stderr(contains("User not found"));
}

#[test]
fn test_clock_events_are_audited() {
    let db = setup_test_db("clock_audit");
    init_db_with_users(&db);

    run(&db, &["in", "ada", "--lat", INST_LAT, "--lon", INST_LON])
        .assert()
        .success();

    run(&db, &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("clock-in"))
        .stdout(contains("ada"));
}
