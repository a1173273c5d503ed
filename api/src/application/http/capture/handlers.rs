pub mod get_capture_page;
