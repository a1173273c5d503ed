use crate::domain::capture::entities::ImageFrame;

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image: ImageFrame,
}
