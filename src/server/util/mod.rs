//! Small helpers shared by the service layer.

pub mod parse;
pub mod password;
pub mod period;
