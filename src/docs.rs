use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::access::AccessResponse;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::health::HealthResponse;
use lydia_models::{
    Account, AccountId, AccountResponse, ChangePasswordRequest, LoginRequest, LoginResponse,
    MessageResponse, Role,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::health,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::me,
        crate::modules::auth::controller::change_password,
        crate::modules::access::controller::admin_access,
        crate::modules::access::controller::platform_access,
        crate::modules::access::controller::company_access,
        crate::modules::access::controller::company_membership,
        crate::modules::access::controller::dashboard_access,
    ),
    components(
        schemas(
            Account,
            AccountId,
            Role,
            LoginRequest,
            ChangePasswordRequest,
            LoginResponse,
            AccountResponse,
            MessageResponse,
            AccessResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Authentication", description = "Login, logout, password change and the current account"),
        (name = "Access", description = "Probes reporting which guards admit the caller")
    ),
    info(
        title = "Lydia API",
        version = "0.1.0",
        description = "Authentication and access control for the Lydia voice-assistant platform."
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
