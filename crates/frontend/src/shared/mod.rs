pub mod api_utils;
pub mod dom_ids;
pub mod external_viewer;
pub mod page_frame;
pub mod page_standard;
