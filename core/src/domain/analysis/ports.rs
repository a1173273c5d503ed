use std::future::Future;

use crate::domain::{
    analysis::{entities::AnalysisReport, value_objects::AnalyzeImageInput},
    capture::entities::ImageFrame,
    common::entities::app_errors::CoreError,
};

/// Hosted vision model that answers a text prompt about one image.
#[cfg_attr(test, mockall::automock)]
pub trait VisionModelClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImageFrame,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn model_name(&self) -> String;

    fn has_credential(&self) -> bool;
}

/// Service trait for ingredient analysis
pub trait AnalysisService: Send + Sync {
    /// Relays the image to the model and returns its raw text.
    fn describe_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Relays the image, then parses the answer into records. An answer with
    /// no recognizable ingredients is an empty report, not an error.
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<AnalysisReport, CoreError>> + Send;
}
