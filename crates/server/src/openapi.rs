use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a customer; every field is a string.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDoc {
    /// Hyphenated UUID assigned by the server; ignored on create.
    #[schema(example = "054b145c-ddbc-4136-a2bd-7bf45ed1bef7")]
    pub customer_id: String,
    #[schema(example = "Cally")]
    pub first_name: String,
    #[schema(example = "Reynolds")]
    pub last_name: String,
    #[schema(example = "penatibus.et@lectusa.com")]
    pub email_address: String,
    #[schema(example = "(901) 166-8355")]
    pub phone_number: String,
    #[schema(example = "556 Lakewood Park, Bismarck, ND 58505")]
    pub address: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// One of `bad_request`, `not_found`, `conflict`, `internal`.
    pub error: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::add,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_customer_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/customers"));
        assert!(paths.contains_key("/customers/{id}"));
        assert!(paths.contains_key("/health"));
        assert!(doc["components"]["schemas"]["CustomerDoc"]["properties"]["emailAddress"].is_object());
    }
}
