use crate::domain::analysis::ports::VisionModelClient;

/// Application service shared by every use case.
///
/// Holds the outbound ports; use-case traits are implemented for it in each
/// domain module's `services.rs`.
#[derive(Clone)]
pub struct Service<V>
where
    V: VisionModelClient,
{
    pub(crate) vision_client: V,
    pub(crate) max_image_bytes: usize,
}

impl<V> Service<V>
where
    V: VisionModelClient,
{
    pub fn new(vision_client: V, max_image_bytes: usize) -> Self {
        Self {
            vision_client,
            max_image_bytes,
        }
    }

    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }
}
