use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Json, PlainText},
};

use business::application::product::catalog::ProductCatalog;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::delete::DeleteProductParams;
use business::domain::product::use_cases::get_by_id::GetProductByIdParams;
use business::domain::product::use_cases::get_by_name::GetProductByNameParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::ProductId;

use crate::api::error::IntoErrorResponse;
use crate::api::product::dto::{ProductRequest, ProductResponse, price_from_wire};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "product id must be an integer";
const INVALID_PRICE: &str = "product price must be a finite number";

pub struct ProductApi {
    catalog: ProductCatalog,
}

impl ProductApi {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Fails with 409 when another product already uses the name.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let Some(price) = price_from_wire(body.0.price) else {
            return CreateProductResponse::BadRequest(PlainText(INVALID_PRICE.to_string()));
        };

        let params = CreateProductParams {
            name: body.0.name,
            description: body.0.description,
            price,
        };

        match self.catalog.create.execute(params).await {
            Ok(product) => CreateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, text) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(text),
                    409 => CreateProductResponse::Conflict(text),
                    _ => CreateProductResponse::InternalError(text),
                }
            }
        }
    }

    /// List all products
    ///
    /// The order of the returned list is not guaranteed.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.catalog.get_all.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, text) = err.into_error_response();
                GetAllProductsResponse::InternalError(text)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductResponse {
        let Ok(id) = id.0.parse::<ProductId>() else {
            return GetProductResponse::BadRequest(PlainText(INVALID_ID.to_string()));
        };

        match self
            .catalog
            .get_by_id
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => GetProductResponse::from_lookup_error(err.into_error_response()),
        }
    }

    /// Get a product by its exact name
    #[oai(path = "/products/name/:name", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_name(&self, name: Path<String>) -> GetProductResponse {
        match self
            .catalog
            .get_by_name
            .execute(GetProductByNameParams { name: name.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => GetProductResponse::from_lookup_error(err.into_error_response()),
        }
    }

    /// Update a product
    ///
    /// Replaces every field of an existing product.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let Ok(id) = id.0.parse::<ProductId>() else {
            return UpdateProductResponse::BadRequest(PlainText(INVALID_ID.to_string()));
        };
        let Some(price) = price_from_wire(body.0.price) else {
            return UpdateProductResponse::BadRequest(PlainText(INVALID_PRICE.to_string()));
        };

        let params = UpdateProductParams {
            id,
            name: body.0.name,
            description: body.0.description,
            price,
        };

        match self.catalog.update.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, text) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(text),
                    404 => UpdateProductResponse::NotFound(text),
                    409 => UpdateProductResponse::Conflict(text),
                    _ => UpdateProductResponse::InternalError(text),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Deleting an already deleted product fails with 404.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Ok(id) = id.0.parse::<ProductId>() else {
            return DeleteProductResponse::BadRequest(PlainText(INVALID_ID.to_string()));
        };

        match self
            .catalog
            .delete
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, text) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(text),
                    _ => DeleteProductResponse::InternalError(text),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 409)]
    Conflict(PlainText<String>),
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}

/// Lookups answer a missing product with an empty 404.
#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}

impl GetProductResponse {
    fn from_lookup_error(
        (status, text): (poem::http::StatusCode, PlainText<String>),
    ) -> Self {
        match status.as_u16() {
            404 => GetProductResponse::NotFound,
            _ => GetProductResponse::InternalError(text),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 404)]
    NotFound(PlainText<String>),
    #[oai(status = 409)]
    Conflict(PlainText<String>),
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 404)]
    NotFound(PlainText<String>),
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use logger::TracingLogger;
    use persistence::product::memory::ProductRepositoryInMemory;

    use super::*;

    fn client() -> TestClient<Route> {
        let catalog = ProductCatalog::new(
            Arc::new(ProductRepositoryInMemory::new()),
            Arc::new(TracingLogger),
        );
        let api = OpenApiService::new(ProductApi::new(catalog), "Product Catalog API", "test");
        TestClient::new(Route::new().nest("/", api))
    }

    #[tokio::test]
    async fn should_create_and_fetch_product() {
        let cli = client();

        let resp = cli
            .post("/products")
            .body_json(&json!({"name": "Widget", "description": "A widget", "price": 9.99}))
            .send()
            .await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let created = json.value().object();
        created.get("id").assert_i64(1);
        created.get("name").assert_string("Widget");
        created.get("description").assert_string("A widget");
        created.get("price").assert_f64(9.99);

        let resp = cli.get("/products/1").send().await;
        resp.assert_status_is_ok();
        resp.json().await.value().object().get("name").assert_string("Widget");

        let resp = cli.get("/products/name/Widget").send().await;
        resp.assert_status_is_ok();
        resp.json().await.value().object().get("id").assert_i64(1);
    }

    #[tokio::test]
    async fn should_answer_conflict_with_plain_text() {
        let cli = client();
        cli.post("/products")
            .body_json(&json!({"name": "Widget", "description": "A widget", "price": 9.99}))
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli
            .post("/products")
            .body_json(&json!({"name": "Widget", "description": "dup", "price": 1.0}))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
        resp.assert_text("product 'Widget' already exists").await;
    }

    #[tokio::test]
    async fn should_answer_bad_request_for_empty_name() {
        let cli = client();

        let resp = cli
            .post("/products")
            .body_json(&json!({"name": "", "description": "A widget", "price": 9.99}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_text("product name must not be empty").await;

        let resp = cli.get("/products").send().await;
        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(0);
    }

    #[tokio::test]
    async fn should_answer_bad_request_for_negative_price() {
        let cli = client();

        let resp = cli
            .post("/products")
            .body_json(&json!({"name": "Widget", "description": "", "price": -1.5}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_text("product price must not be negative").await;
    }

    #[tokio::test]
    async fn should_answer_empty_not_found_for_missing_lookups() {
        let cli = client();

        let resp = cli.get("/products/999").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_text("").await;

        let resp = cli.get("/products/name/Inexistent").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_text("").await;
    }

    #[tokio::test]
    async fn should_reject_non_numeric_id() {
        let cli = client();

        let resp = cli.get("/products/abc").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_text(INVALID_ID).await;
    }

    #[tokio::test]
    async fn should_update_existing_product() {
        let cli = client();
        cli.post("/products")
            .body_json(&json!({"name": "Widget", "description": "A widget", "price": 9.99}))
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli
            .put("/products/1")
            .body_json(&json!({"name": "Widget Pro", "description": "Better", "price": 19.5}))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let updated = json.value().object();
        updated.get("id").assert_i64(1);
        updated.get("name").assert_string("Widget Pro");
        updated.get("price").assert_f64(19.5);
    }

    #[tokio::test]
    async fn should_answer_not_found_with_message_when_updating_missing_product() {
        let cli = client();

        let resp = cli
            .put("/products/999")
            .body_json(&json!({"name": "Ghost", "description": "", "price": 1.0}))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_text("product with id 999 not found").await;
    }

    #[tokio::test]
    async fn should_delete_once_then_answer_not_found() {
        let cli = client();
        cli.post("/products")
            .body_json(&json!({"name": "Widget", "description": "A widget", "price": 9.99}))
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli.delete("/products/1").send().await;
        resp.assert_status(StatusCode::NO_CONTENT);

        let resp = cli.delete("/products/1").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_text("product with id 1 not found").await;

        cli.get("/products/1")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_list_every_product() {
        let cli = client();
        for name in ["Widget", "Gadget"] {
            cli.post("/products")
                .body_json(&json!({"name": name, "description": "", "price": 2.0}))
                .send()
                .await
                .assert_status_is_ok();
        }

        let resp = cli.get("/products").send().await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(2);
    }
}
