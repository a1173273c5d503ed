pub mod relay_image;
