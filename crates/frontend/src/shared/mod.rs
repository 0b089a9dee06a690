pub mod api_utils;
pub mod components;
pub mod data_table;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod notify;
pub mod number_format;
pub mod page_frame;
