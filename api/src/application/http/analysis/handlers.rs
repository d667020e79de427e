pub mod analyze_image;
pub mod analyze_sample;
pub mod analyze_text;
