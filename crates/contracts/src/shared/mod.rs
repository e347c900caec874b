pub mod viewer_links;
