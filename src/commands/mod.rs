pub mod convert;
pub mod day;
pub mod month;
pub mod sidebar;
