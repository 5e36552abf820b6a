pub mod day;
pub mod filter;
pub mod integrity;
pub mod month;
pub mod navigation;
pub mod shift_detail;
pub mod week;
