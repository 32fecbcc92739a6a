//! Attendance session engine: the rules for opening and closing sessions
//! and the read paths used for reporting.
//!
//! A clock-in deliberately does NOT look for an already-open session:
//! a user can hold several concurrently open sessions (e.g. when a site
//! never registered the matching clock-out). "The" current session is
//! therefore always defined as the most recent open one, and that is the
//! session a clock-out closes.

use crate::core::geofence::Geofence;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::point::GeoPoint;
use crate::models::session::AttendanceSession;
use crate::utils::date::{day_bounds, start_of_day};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::Connection;

fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn geofence_rejection(geofence: &Geofence, point: Option<GeoPoint>) -> AppError {
    match point {
        Some(p) => AppError::OutsideGeofence(format!(
            "{:.0} m from institution (max {} m)",
            geofence.distance_to(p),
            geofence.max_radius_meters
        )),
        None => AppError::OutsideGeofence("no coordinates provided".to_string()),
    }
}

/// Open a new attendance session for `user_id`.
///
/// Rejects with `UserNotFound` when the user id does not resolve and with
/// `OutsideGeofence` when the reported position fails the radius check
/// (a missing position always fails). Nothing is written on rejection.
pub fn clock_in(
    conn: &Connection,
    geofence: &Geofence,
    user_id: i64,
    point: Option<GeoPoint>,
) -> AppResult<AttendanceSession> {
    let user = queries::find_user_by_id(conn, user_id)?
        .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;

    if !geofence.admits(point) {
        return Err(geofence_rejection(geofence, point));
    }

    queries::insert_session(conn, user.id, now_utc(), point)
}

/// Close the most recent open session for `user_id`.
///
/// Rejects with `NoActiveSession` when the user has no open session and
/// with `OutsideGeofence` when the position fails the radius check; the
/// session stays open in both cases.
pub fn clock_out(
    conn: &Connection,
    geofence: &Geofence,
    user_id: i64,
    point: Option<GeoPoint>,
) -> AppResult<AttendanceSession> {
    let mut session = queries::latest_open_session(conn, user_id)?
        .ok_or_else(|| AppError::NoActiveSession(user_id.to_string()))?;

    if !geofence.admits(point) {
        return Err(geofence_rejection(geofence, point));
    }

    let closed_at = now_utc();
    queries::close_session(conn, session.id, closed_at, point)?;

    session.clock_out = Some(closed_at);
    session.location_out = point;
    Ok(session)
}

/// All sessions, newest first.
pub fn list_all(conn: &Connection) -> AppResult<Vec<AttendanceSession>> {
    queries::sessions_all(conn)
}

/// All sessions of one user, newest first.
pub fn list_for_user(conn: &Connection, user_id: i64) -> AppResult<Vec<AttendanceSession>> {
    queries::sessions_for_user(conn, user_id)
}

/// Sessions that clocked in on `date` (UTC day bounds, both inclusive),
/// oldest first.
pub fn daily_summary(conn: &Connection, date: NaiveDate) -> AppResult<Vec<AttendanceSession>> {
    let (start, end) = day_bounds(date);
    queries::sessions_between(conn, start, end)
}

/// Sessions of one user with optional date bounds, oldest first.
/// `start` becomes the start-of-day instant; `end` is taken as provided
/// (also start-of-day), so callers wanting the whole end day must pass
/// the day after, or use the daily summary.
pub fn range_for_user(
    conn: &Connection,
    user_id: i64,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<Vec<AttendanceSession>> {
    queries::sessions_for_user_range(
        conn,
        user_id,
        start.map(start_of_day),
        end.map(start_of_day),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::insert_user;
    use crate::models::role::Role;
    use chrono::NaiveDate;

    const INST: (f64, f64) = (5.669533, -0.196003);

    fn fence() -> Geofence {
        Geofence {
            latitude: INST.0,
            longitude: INST.1,
            max_radius_meters: 50,
        }
    }

    fn inside() -> Option<GeoPoint> {
        Some(GeoPoint::new(INST.0, INST.1))
    }

    fn outside() -> Option<GeoPoint> {
        // roughly 1.1 km north of the institution
        Some(GeoPoint::new(INST.0 + 0.01, INST.1))
    }

    fn test_conn() -> (Connection, i64) {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        init_db(&conn).expect("init db");
        let user = insert_user(&conn, "Ada Mensah", "ada", Role::Staff).expect("insert user");
        (conn, user.id)
    }

    #[test]
    fn clock_in_unknown_user_rejects() {
        let (conn, _) = test_conn();
        let err = clock_in(&conn, &fence(), 999, inside()).unwrap_err();
        assert!(matches!(err, AppError::UserNotFound(_)));
        assert!(list_all(&conn).unwrap().is_empty());
    }

    #[test]
    fn clock_in_outside_radius_rejects_and_writes_nothing() {
        let (conn, uid) = test_conn();
        let err = clock_in(&conn, &fence(), uid, outside()).unwrap_err();
        assert!(matches!(err, AppError::OutsideGeofence(_)));
        assert!(list_for_user(&conn, uid).unwrap().is_empty());
    }

    #[test]
    fn clock_in_without_coordinates_rejects() {
        let (conn, uid) = test_conn();
        let err = clock_in(&conn, &fence(), uid, None).unwrap_err();
        assert!(matches!(err, AppError::OutsideGeofence(_)));
    }

    #[test]
    fn clock_out_without_open_session_rejects() {
        let (conn, uid) = test_conn();
        let err = clock_out(&conn, &fence(), uid, inside()).unwrap_err();
        assert!(matches!(err, AppError::NoActiveSession(_)));
    }

    #[test]
    fn full_in_out_cycle_closes_the_same_session() {
        let (conn, uid) = test_conn();

        let opened = clock_in(&conn, &fence(), uid, inside()).unwrap();
        assert!(opened.is_open());
        assert!(opened.location_in.is_some());

        let closed = clock_out(&conn, &fence(), uid, inside()).unwrap();
        assert_eq!(closed.id, opened.id);
        assert!(!closed.is_open());
        assert!(closed.clock_out.unwrap() >= closed.clock_in);

        // a second clock-out finds nothing to close
        let err = clock_out(&conn, &fence(), uid, inside()).unwrap_err();
        assert!(matches!(err, AppError::NoActiveSession(_)));
    }

    #[test]
    fn clock_out_outside_radius_keeps_session_open() {
        let (conn, uid) = test_conn();
        clock_in(&conn, &fence(), uid, inside()).unwrap();

        let err = clock_out(&conn, &fence(), uid, outside()).unwrap_err();
        assert!(matches!(err, AppError::OutsideGeofence(_)));

        let sessions = list_for_user(&conn, uid).unwrap();
        assert_eq!(sessions.len(), 1);
        assert!(sessions[0].is_open());
    }

    #[test]
    fn double_clock_in_leaves_two_open_sessions() {
        // No open-session check at clock-in: this is the documented
        // behavior, not an accident.
        let (conn, uid) = test_conn();

        let first = clock_in(&conn, &fence(), uid, inside()).unwrap();
        // distinct clock_in timestamps keep (user_id, clock_in) unique
        conn.execute(
            "UPDATE attendance_logs SET clock_in = '2000-01-01 08:00:00' WHERE id = ?1",
            [first.id],
        )
        .unwrap();
        let second = clock_in(&conn, &fence(), uid, inside()).unwrap();
        assert_ne!(first.id, second.id);

        let open: Vec<_> = list_for_user(&conn, uid)
            .unwrap()
            .into_iter()
            .filter(|s| s.is_open())
            .collect();
        assert_eq!(open.len(), 2);

        // clock-out closes the most recent one
        let closed = clock_out(&conn, &fence(), uid, inside()).unwrap();
        assert_eq!(closed.id, second.id);
    }

    fn seed_session(conn: &Connection, uid: i64, ts: &str) {
        conn.execute(
            "INSERT INTO attendance_logs (user_id, clock_in, clock_out) VALUES (?1, ?2, ?2)",
            rusqlite::params![uid, ts],
        )
        .unwrap();
    }

    #[test]
    fn daily_summary_is_day_exact_and_ascending() {
        let (conn, uid) = test_conn();
        seed_session(&conn, uid, "2026-08-14 23:59:59");
        seed_session(&conn, uid, "2026-08-15 17:01:00");
        seed_session(&conn, uid, "2026-08-15 08:30:00");
        seed_session(&conn, uid, "2026-08-16 00:00:00");

        let day = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        let sessions = daily_summary(&conn, day).unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].clock_in_str(), "2026-08-15 08:30:00");
        assert_eq!(sessions[1].clock_in_str(), "2026-08-15 17:01:00");
    }

    #[test]
    fn range_with_only_start_bound() {
        let (conn, uid) = test_conn();
        seed_session(&conn, uid, "2026-07-31 09:00:00");
        seed_session(&conn, uid, "2026-08-01 09:00:00");
        seed_session(&conn, uid, "2026-08-10 09:00:00");

        let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let sessions = range_for_user(&conn, uid, Some(start), None).unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].clock_in_str(), "2026-08-01 09:00:00");
        assert_eq!(sessions[1].clock_in_str(), "2026-08-10 09:00:00");
    }

    #[test]
    fn range_end_bound_is_start_of_day() {
        let (conn, uid) = test_conn();
        seed_session(&conn, uid, "2026-08-10 00:00:00");
        seed_session(&conn, uid, "2026-08-10 09:00:00");

        let end = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let sessions = range_for_user(&conn, uid, None, Some(end)).unwrap();

        // midnight session is included, later the same day is not
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].clock_in_str(), "2026-08-10 00:00:00");
    }

    #[test]
    fn list_queries_are_idempotent() {
        let (conn, uid) = test_conn();
        seed_session(&conn, uid, "2026-08-10 09:00:00");
        seed_session(&conn, uid, "2026-08-11 09:00:00");

        let a = list_for_user(&conn, uid).unwrap();
        let b = list_for_user(&conn, uid).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
        }
        // newest first
        assert_eq!(a[0].clock_in_str(), "2026-08-11 09:00:00");
    }
}
