use models_lending::{
    loan::{BorrowType, Loan, LoanStatus},
    resource::{Resource, ResourceKind, ResourceStatus},
    response::ErrorResponse,
    user::UserProfile,
};
use utoipa::OpenApi;

use crate::api::{
    account::{
        login::{LoginRequest, LoginResponse},
        register::{RegisterRequest, RegisterResponse},
        update_profile::UpdateProfileRequest,
    },
    health::HealthResponse,
    loans::create_loan::CreateLoanRequest,
    resources::{create_resource::CreateResourceRequest, seed::FillCatalogResponse},
};

#[derive(OpenApi)]
#[openapi(
        paths(
            crate::api::health::health,
            crate::api::account::register::register_handler,
            crate::api::account::login::login_handler,
            crate::api::account::get_profile::get_profile_handler,
            crate::api::account::update_profile::update_profile_handler,
            crate::api::resources::list_resources::list_resources_handler,
            crate::api::resources::get_resource::get_resource_handler,
            crate::api::resources::create_resource::create_resource_handler,
            crate::api::resources::set_availability::disable_resource_handler,
            crate::api::resources::set_availability::enable_resource_handler,
            crate::api::resources::seed::fill_catalog_handler,
            crate::api::loans::create_loan::create_loan_handler,
            crate::api::loans::list_loans::list_loans_handler,
            crate::api::loans::return_loan::return_loan_handler,
        ),
        components(
            schemas(
                HealthResponse,
                ErrorResponse,

                RegisterRequest,
                RegisterResponse,
                LoginRequest,
                LoginResponse,
                UpdateProfileRequest,
                UserProfile,

                Resource,
                ResourceKind,
                ResourceStatus,
                CreateResourceRequest,
                FillCatalogResponse,

                Loan,
                LoanStatus,
                BorrowType,
                CreateLoanRequest,
            ),
        ),
        tags(
            (name = "account", description = "Member registration, login and profile"),
            (name = "resources", description = "The book and board game catalog"),
            (name = "loans", description = "Borrowing and returning resources"),
            (name = "health", description = "Health check endpoints")
        ),
        info(
            title = "Lending Service API",
            description = "API for the médiathèque lending platform",
            version = "0.1.0"
        )
    )]
#[derive(Debug)]
pub struct ApiDoc;
