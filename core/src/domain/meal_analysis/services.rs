use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::domain::{
    authentication::{ports::SessionTokenRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    meal_analysis::{
        allergens::annotate_allergens,
        extraction::parse_meal_analysis,
        image::ImagePayload,
        ports::{MealAnalysisService, VisionClient},
        prompt::build_analysis_prompt,
        value_objects::{AnalyzeMealInput, AnalyzedMeal},
    },
    user::ports::UserRepository,
};

impl<U, H, S, V, HC> MealAnalysisService for Service<U, H, S, V, HC>
where
    U: UserRepository,
    H: HasherRepository,
    S: SessionTokenRepository,
    V: VisionClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn analyze_meal(
        &self,
        identity: Identity,
        input: AnalyzeMealInput,
    ) -> Result<AnalyzedMeal, CoreError> {
        // 1. Require an image
        let image_base64 = input
            .image_base64
            .filter(|image| !image.is_empty())
            .ok_or(CoreError::MissingImage)?;
        let image = ImagePayload::from_base64(image_base64);

        // 2. Build prompt from preferences
        let prompt = build_analysis_prompt(input.preferences.as_ref());

        // 3. Call the vision model
        debug!(mime_type = image.mime_type(), size = image.len(), "requesting meal analysis");
        let raw_response = self
            .vision_client
            .analyze_image(prompt, image)
            .await?
            .ok_or(CoreError::EmptyModelResponse)?;

        // 4. Extract and validate the analysis
        let mut analysis = parse_meal_analysis(&raw_response)?;

        // 5. Cross-match declared allergies
        let declared = input
            .preferences
            .as_ref()
            .map(|preferences| preferences.allergies())
            .unwrap_or_default();
        if annotate_allergens(&mut analysis, declared) {
            info!("allergen alert added to analysis");
        }

        Ok(AnalyzedMeal {
            analysis,
            analyzed_at: Utc::now(),
        })
    }
}
