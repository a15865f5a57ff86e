mod cv_detail_page;
mod cv_list_page;

pub use cv_detail_page::cv_detail_page_handler;
pub use cv_list_page::{cv_list_page_handler, ListPageQuery};
