use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    meal_analysis::{
        image::ImagePayload,
        value_objects::{AnalyzeMealInput, AnalyzedMeal},
    },
};

/// Client for a hosted multimodal completion model.
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    /// Returns the model's text reply, or `None` when the reply carried no content.
    fn analyze_image(
        &self,
        prompt: String,
        image: ImagePayload,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealAnalysisService: Send + Sync {
    fn analyze_meal(
        &self,
        identity: Identity,
        input: AnalyzeMealInput,
    ) -> impl Future<Output = Result<AnalyzedMeal, CoreError>> + Send;
}
