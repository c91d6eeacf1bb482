pub mod pager;
pub mod save_status;
