use crate::handlers::{
    auth::{get_current_user, login},
    health::health_check,
    profile::{
        add_experience, delete_account, delete_experience, get_my_profile,
        get_profile_by_user_id, get_profiles, upsert_profile,
    },
    users::register_user,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Registration and authentication
        .route("/api/users", post(register_user))
        .route("/api/auth", get(get_current_user).post(login))
        // Profiles
        .route(
            "/api/profile",
            get(get_profiles).post(upsert_profile).delete(delete_account),
        )
        .route("/api/profile/me", get(get_my_profile))
        .route("/api/profile/user/:user_id", get(get_profile_by_user_id))
        .route("/api/profile/experience", put(add_experience))
        .route("/api/profile/experience/:exp_id", delete(delete_experience))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
