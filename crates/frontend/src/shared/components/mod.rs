pub mod notice_banner;
pub mod page_header;
pub mod table;
pub mod ui;
