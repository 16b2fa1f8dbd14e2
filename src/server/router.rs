use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        assignment::{self, ASSIGNMENT_TAG},
        auth::{self, AUTH_TAG},
        retailer::{self, RETAILER_TAG},
        sales_rep::{self, SALES_REP_TAG},
        taxonomy::{self, TAXONOMY_TAG},
        user::{self, USER_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Security scheme referenced by every protected endpoint.
pub static BEARER_AUTH: &str = "bearer_auth";

/// Adds the bearer token scheme to the generated document.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_AUTH,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token issued by POST /auth/login."))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Retailer Console API",
        description = "Taxonomy, retailer, assignment and user management for admins, and \
                       assigned-retailer access for sales reps."
    ),
    tags(
        (name = AUTH_TAG, description = "Login and current user"),
        (name = TAXONOMY_TAG, description = "Regions, areas, territories and distributors"),
        (name = RETAILER_TAG, description = "Retailer management and CSV import"),
        (name = ASSIGNMENT_TAG, description = "Retailer to sales rep assignments"),
        (name = SALES_REP_TAG, description = "Sales reps and their assigned retailers"),
        (name = USER_TAG, description = "User accounts")
    )
)]
pub struct ApiDoc;

/// Builds the application router with every API route, the Swagger UI and the HTTP layers.
///
/// The OpenAPI document is served at `/openapi.json` and browsable at `/docs`.
///
/// # Arguments
/// - `config` - Application configuration for the upload limit and CORS origin
///
/// # Returns
/// - `Ok(Router)` - Router still expecting `AppState`
/// - `Err(AppError::ConfigErr)` - `CORS_ALLOWED_ORIGIN` is not a valid header value
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::me))
        .routes(routes!(taxonomy::list_regions, taxonomy::create_region))
        .routes(routes!(taxonomy::update_region, taxonomy::delete_region))
        .routes(routes!(taxonomy::list_areas, taxonomy::create_area))
        .routes(routes!(taxonomy::update_area, taxonomy::delete_area))
        .routes(routes!(taxonomy::list_territories, taxonomy::create_territory))
        .routes(routes!(taxonomy::update_territory, taxonomy::delete_territory))
        .routes(routes!(taxonomy::list_distributors, taxonomy::create_distributor))
        .routes(routes!(taxonomy::update_distributor, taxonomy::delete_distributor))
        .routes(routes!(retailer::list_retailers, retailer::create_retailer))
        .routes(routes!(
            retailer::get_retailer,
            retailer::update_retailer,
            retailer::delete_retailer
        ))
        .routes(routes!(retailer::import_retailers))
        .routes(routes!(assignment::bulk_assign))
        .routes(routes!(sales_rep::list_sales_reps))
        .routes(routes!(sales_rep::list_assigned_retailers))
        .routes(routes!(
            sales_rep::get_assigned_retailer,
            sales_rep::update_assigned_retailer
        ))
        .routes(routes!(user::list_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/docs").url("/openapi.json", api))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors_layer(config.cors_allowed_origin.as_deref())?)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// Allows any origin when none is configured, otherwise exactly the configured one.
fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let Some(origin) = origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "CORS_ALLOWED_ORIGIN".to_string(),
            value: origin.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
