use crate::{
    domain::common::{LabelsightConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiVisionClient,
};

pub type LabelsightService = Service<GeminiVisionClient>;

pub fn create_service(config: LabelsightConfig) -> Result<LabelsightService, CoreError> {
    let vision_client = GeminiVisionClient::new(&config.llm)?;

    tracing::info!(
        model = %config.llm.gemini_model,
        credential_configured = config.llm.gemini_api_key.is_some(),
        "Vision model client initialised"
    );

    Ok(Service::new(vision_client, config.capture.max_image_bytes))
}
