use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::category::use_cases::create::{
    CreateCategoryParams, CreateCategoryUseCase,
};
use business::domain::category::use_cases::delete::{
    DeleteCategoryParams, DeleteCategoryUseCase,
};
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::category::use_cases::update::{
    UpdateCategoryParams, UpdateCategoryUseCase,
};
use business::domain::product::use_cases::search_by_category::{
    SearchByCategoryParams, SearchProductsByCategoryUseCase,
};

use crate::api::category::dto::{CategoryRequest, CategoryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductListResponse;
use crate::api::security::{Capability, JwtBearer};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    search_products_use_case: Arc<dyn SearchProductsByCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
        search_products_use_case: Arc<dyn SearchProductsByCategoryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_use_case,
            delete_use_case,
            search_products_use_case,
        }
    }
}

#[OpenApi]
impl CategoryApi {
    /// Create a category
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(
        &self,
        auth: JwtBearer,
        body: Json<CategoryRequest>,
    ) -> CreateCategoryResponse {
        if let Err(json) = auth.0.require(Capability::Admin) {
            return CreateCategoryResponse::Forbidden(json);
        }

        match self
            .create_use_case
            .execute(CreateCategoryParams { name: body.0.name })
            .await
        {
            Ok(category) => CreateCategoryResponse::Created(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    409 => CreateCategoryResponse::Conflict(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// List all categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self, _auth: JwtBearer) -> GetAllCategoriesResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => GetAllCategoriesResponse::Ok(Json(
                categories.into_iter().map(Into::into).collect(),
            )),
            Err(err) => GetAllCategoriesResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Rename a category
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update_category(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<CategoryRequest>,
    ) -> UpdateCategoryResponse {
        if let Err(json) = auth.0.require(Capability::Admin) {
            return UpdateCategoryResponse::Forbidden(json);
        }
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateCategoryResponse::BadRequest(ErrorResponse::invalid_id(
                "category.invalid_id",
            ));
        };

        match self
            .update_use_case
            .execute(UpdateCategoryParams {
                id: uuid,
                name: body.0.name,
            })
            .await
        {
            Ok(category) => UpdateCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCategoryResponse::BadRequest(json),
                    404 => UpdateCategoryResponse::NotFound(json),
                    409 => UpdateCategoryResponse::Conflict(json),
                    _ => UpdateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a category
    ///
    /// Products tagged with it are kept and lose the tag.
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete_category(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> DeleteCategoryResponse {
        if let Err(json) = auth.0.require(Capability::Admin) {
            return DeleteCategoryResponse::Forbidden(json);
        }
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteCategoryResponse::BadRequest(ErrorResponse::invalid_id(
                "category.invalid_id",
            ));
        };

        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id: uuid })
            .await
        {
            Ok(()) => DeleteCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCategoryResponse::NotFound(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// List the products of a category
    #[oai(
        path = "/categories/:id/products",
        method = "get",
        tag = "ApiTags::Categories"
    )]
    async fn search_products(
        &self,
        _auth: JwtBearer,
        id: Path<String>,
    ) -> SearchProductsResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return SearchProductsResponse::BadRequest(ErrorResponse::invalid_id(
                "category.invalid_id",
            ));
        };

        match self
            .search_products_use_case
            .execute(SearchByCategoryParams { category_id: uuid })
            .await
        {
            Ok(products) => SearchProductsResponse::Ok(Json(products.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SearchProductsResponse::NotFound(json),
                    _ => SearchProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCategoryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
