pub mod point;
pub mod role;
pub mod session;
pub mod user;
