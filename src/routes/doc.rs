use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    contexts::{Address, Attribute, Condition, EnabledFields, OrganizationContext, Persona, UserContext},
    dto::{
        auth::{AuthResponse, Session, SigninRequest, SignupRequest},
        cart::AddToCartRequest,
        checkout::{CheckoutLogRequest, CheckoutLogResponse},
        contexts::{ConditionResult, ConditionView, EvaluateRequest, Evaluation},
    },
    models::{CartItem, User},
    response::{ErrorBody, MessageResponse, StatusResponse},
    routes::{auth, cart, checkout, contexts, health},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::signup,
        auth::signin,
        auth::session,
        auth::signout,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::clear_cart,
        checkout::log_checkout,
        contexts::list_personas,
        contexts::list_conditions,
        contexts::evaluate
    ),
    components(
        schemas(
            User,
            CartItem,
            SignupRequest,
            SigninRequest,
            Session,
            AuthResponse,
            AddToCartRequest,
            CheckoutLogRequest,
            CheckoutLogResponse,
            Attribute,
            Address,
            UserContext,
            OrganizationContext,
            Persona,
            EnabledFields,
            Condition,
            ConditionView,
            ConditionResult,
            EvaluateRequest,
            Evaluation,
            ErrorBody,
            MessageResponse,
            StatusResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Checkout", description = "Checkout logging"),
        (name = "Contexts", description = "Multi-context evaluation showcase"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
