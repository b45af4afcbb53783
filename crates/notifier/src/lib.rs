pub mod dispatch;
pub mod recipient;
