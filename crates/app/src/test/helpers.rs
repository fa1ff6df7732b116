//! Test Helpers

use crate::{
    domain::{
        customers::{
            CustomersService, CustomersServiceError,
            records::{CustomerRecord, CustomerUuid, NewCustomer},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::{NewProduct, ProductCategory, ProductDetails},
            records::{ProductRecord, ProductUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn product_details(name: &str, price: u64, stock: u32) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        sku: format!("SKU-{}", name.len()),
        category: ProductCategory::Clothing,
        image_url: "https://cdn.example.com/product.png".to_string(),
        notes: "test product".to_string(),
        price,
        stock,
        location: "Aisle 1".to_string(),
        is_available: true,
    }
}

pub(crate) fn new_customer(name: &str, phone_number: &str) -> NewCustomer {
    NewCustomer {
        uuid: CustomerUuid::new(),
        name: name.to_string(),
        phone_number: phone_number.to_string(),
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: u64,
    stock: u32,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            details: product_details(name, price, stock),
        })
        .await
}

pub(crate) async fn create_customer(
    ctx: &TestContext,
    name: &str,
    phone_number: &str,
) -> Result<CustomerRecord, CustomersServiceError> {
    ctx.customers
        .register_customer(new_customer(name, phone_number))
        .await
}
