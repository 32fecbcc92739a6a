pub mod attendance;
pub mod geofence;
pub mod identity;
