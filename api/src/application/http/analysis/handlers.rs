pub mod analyze_image;
pub mod parse_text;
pub mod upload_image;
