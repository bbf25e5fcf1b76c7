use super::error::ApiError;
use super::types::{
    DeleteParams, GeneratedText, GenerateParams, ListParams, MessageResponse, Review,
    ReviewPayload,
};
use crate::generation::client::TextGenerator;
use crate::store::adapter::{ReviewStore, StoreError};

use axum::Json;
use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use std::sync::Arc;

pub async fn handle_root() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse::new("Book review service")),
    )
}

pub async fn handle_health() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::OK, Json(MessageResponse::new("OK")))
}

fn validate_payload(payload: ReviewPayload) -> Result<Review, ApiError> {
    if payload.owner.is_empty()
        || payload.title.is_empty()
        || payload.author.is_empty()
        || payload.text.is_empty()
    {
        return Err(ApiError::Validation(
            "All fields are required".to_string(),
        ));
    }
    Ok(payload.into_review())
}

pub async fn handle_get_reviews(
    Query(params): Query<ListParams>,
    Extension(store): Extension<Arc<ReviewStore>>,
) -> Result<(StatusCode, Json<Vec<Review>>), ApiError> {
    if params.owner.is_empty() {
        return Err(ApiError::Validation("Owner is required".to_string()));
    }

    match store.list(&params.owner).await {
        Ok(reviews) => Ok((StatusCode::OK, Json(reviews))),
        Err(StoreError::NotFound) => Err(ApiError::NotFound),
        Err(err) => {
            tracing::error!("Failed to list reviews for {}: {}", params.owner, err);
            Err(ApiError::from(err))
        }
    }
}

pub async fn handle_add_review(
    Extension(store): Extension<Arc<ReviewStore>>,
    Json(payload): Json<ReviewPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let review = validate_payload(payload)?;

    if let Err(err) = store.put(review).await {
        tracing::error!("Failed to add review: {}", err);
        return Err(ApiError::from(err));
    }

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Review added successfully")),
    ))
}

pub async fn handle_update_review(
    Extension(store): Extension<Arc<ReviewStore>>,
    Json(payload): Json<ReviewPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let review = validate_payload(payload)?;

    if let Err(err) = store.put(review).await {
        tracing::error!("Failed to update review: {}", err);
        return Err(ApiError::from(err));
    }

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Review updated successfully")),
    ))
}

pub async fn handle_delete_review(
    Query(params): Query<DeleteParams>,
    Extension(store): Extension<Arc<ReviewStore>>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    if params.owner.is_empty() || params.title.is_empty() {
        return Err(ApiError::Validation(
            "Owner and title are required".to_string(),
        ));
    }

    match store.delete(&params.owner, &params.title).await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Review deleted successfully")),
        )),
        Err(StoreError::NotFound) => Err(ApiError::NotFound),
        Err(err) => {
            tracing::error!(
                "Failed to delete review {}/{}: {}",
                params.owner,
                params.title,
                err
            );
            Err(ApiError::from(err))
        }
    }
}

pub async fn handle_generate_review(
    Query(params): Query<GenerateParams>,
    Extension(generator): Extension<Arc<dyn TextGenerator>>,
) -> Result<(StatusCode, Json<GeneratedText>), ApiError> {
    if params.title.is_empty() || params.author.is_empty() {
        return Err(ApiError::Validation(
            "Title and author are required".to_string(),
        ));
    }

    match generator.generate(&params.title, &params.author).await {
        Ok(text) => Ok((StatusCode::OK, Json(GeneratedText { text }))),
        Err(err) => {
            tracing::error!("Failed to generate review for '{}': {}", params.title, err);
            Err(ApiError::from(err))
        }
    }
}
