//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{review_handler, user_handler};
use crate::domain::{CreateReview, Review, ReviewConnection, ReviewEdge, UpdateReview, User};
use crate::types::{AffectedRows, CreatedId, PageInfo};

/// OpenAPI documentation for the review API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Review API",
        version = "0.1.0",
        description = "Meeting reviews with offset and cursor pagination"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Review endpoints
        review_handler::list_reviews,
        review_handler::review_feed,
        review_handler::list_reviews_by_meetings,
        review_handler::list_reviews_by_users,
        review_handler::get_review,
        review_handler::create_review,
        review_handler::update_review,
        review_handler::delete_review,
        // User endpoints
        user_handler::get_user,
    ),
    components(
        schemas(
            Review,
            ReviewEdge,
            ReviewConnection,
            PageInfo,
            CreateReview,
            UpdateReview,
            User,
            CreatedId,
            AffectedRows,
        )
    ),
    tags(
        (name = "Reviews", description = "Meeting review operations"),
        (name = "Users", description = "User lookup")
    )
)]
pub struct ApiDoc;
