pub mod human;
pub mod replay;

pub use human::HumanMode;
pub use replay::{OutputFormat, ReplayMode, ReplayReport, ReplayStep, parse_script};
