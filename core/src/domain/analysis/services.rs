use tracing::{debug, info, warn};

use crate::domain::{
    analysis::{
        entities::AnalysisReport,
        ports::{AnalysisService, VisionModelClient},
        prompt::INGREDIENT_ANALYSIS_PROMPT,
        value_objects::AnalyzeImageInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<V> AnalysisService for Service<V>
where
    V: VisionModelClient,
{
    async fn describe_image(&self, input: AnalyzeImageInput) -> Result<String, CoreError> {
        input.image.ensure_within(self.max_image_bytes)?;

        debug!(
            mime_type = input.image.mime_type(),
            bytes = input.image.len(),
            "Sending image to vision model"
        );

        self.vision_client
            .generate_with_image(INGREDIENT_ANALYSIS_PROMPT.to_string(), input.image)
            .await
    }

    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<AnalysisReport, CoreError> {
        let raw_text = self.describe_image(input).await?;
        let report = AnalysisReport::new(raw_text);

        if report.is_empty() {
            warn!(report_id = %report.id, "No ingredients detected in model response");
        } else {
            info!(
                report_id = %report.id,
                ingredients = report.records.len(),
                "Ingredient analysis completed"
            );
        }

        Ok(report)
    }
}
