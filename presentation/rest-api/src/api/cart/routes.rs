use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::{Cart, ProductId};
use business::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use business::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};

use crate::api::cart::dto::{CartResponse, UpdateProductAmountRequest};
use crate::api::cart::error_mapper::{CartFailure, CartOperation};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    add_product_use_case: Arc<dyn AddProductUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductUseCase>,
    update_product_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
}

impl CartApi {
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        add_product_use_case: Arc<dyn AddProductUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductUseCase>,
        update_product_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_product_amount_use_case,
        }
    }
}

/// Shopping cart API
///
/// Every mutation is validated against current stock and persisted before it
/// is applied. Failures carry the notification to show in `message`.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the current cart with its totals.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        match self.get_cart_use_case.execute().await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                tracing::error!(%err, "failed to read cart");
                GetCartResponse::InternalError(Json(ErrorResponse {
                    name: "InternalError".to_string(),
                    code: err.to_string(),
                    message: "failed to load cart".to_string(),
                }))
            }
        }
    }

    /// Add one unit of a product
    ///
    /// Inserts the product with amount 1 when it is not in the cart yet,
    /// otherwise increments its amount if stock allows it.
    #[oai(
        path = "/cart/products/:product_id",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn add_product(&self, product_id: Path<u64>) -> CartMutationResponse {
        let result = self
            .add_product_use_case
            .execute(AddProductParams {
                product_id: ProductId::new(product_id.0),
            })
            .await;

        CartMutationResponse::from_result(CartOperation::Add, result)
    }

    /// Remove a product
    ///
    /// Removes the product line from the cart, whatever its amount.
    #[oai(
        path = "/cart/products/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_product(&self, product_id: Path<u64>) -> CartMutationResponse {
        let result = self
            .remove_product_use_case
            .execute(RemoveProductParams {
                product_id: ProductId::new(product_id.0),
            })
            .await;

        CartMutationResponse::from_result(CartOperation::Remove, result)
    }

    /// Change the amount of a product
    ///
    /// Sets the absolute amount of a product already in the cart. Zero is
    /// rejected; use the remove endpoint instead.
    #[oai(
        path = "/cart/products/:product_id/amount",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_product_amount(
        &self,
        product_id: Path<u64>,
        body: Json<UpdateProductAmountRequest>,
    ) -> CartMutationResponse {
        let result = self
            .update_product_amount_use_case
            .execute(UpdateProductAmountParams {
                product_id: ProductId::new(product_id.0),
                amount: body.0.amount,
            })
            .await;

        CartMutationResponse::from_result(CartOperation::ChangeAmount, result)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartMutationResponse {
    fn from_result(operation: CartOperation, result: Result<Cart, CartError>) -> Self {
        match result {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = CartFailure::new(operation, err).into_error_response();
                match status.as_u16() {
                    404 => CartMutationResponse::NotFound(json),
                    409 => CartMutationResponse::Conflict(json),
                    502 => CartMutationResponse::BadGateway(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }
}
