use utoipa::OpenApi;

use crate::api::models::{
    ErrorResponse, ExceptionDetails, InvoiceComponent, ValidationErrorItem,
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::get_invoices),
    components(schemas(
        InvoiceComponent,
        ErrorResponse,
        ExceptionDetails,
        ValidationErrorItem
    )),
    tags((name = "invoices", description = "Invoice listing API"))
)]
pub struct ApiDoc;
