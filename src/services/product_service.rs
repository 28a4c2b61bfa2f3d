use crate::{
    db::dao::{ProductDao, RecordDao},
    db::entities::product,
    error::AppError,
    requests::NewProduct,
};

#[derive(Clone)]
pub struct ProductService {
    product_dao: ProductDao,
}

impl ProductService {
    pub fn new(product_dao: ProductDao) -> Self {
        Self { product_dao }
    }

    /// Registers a product. A sku that is already taken yields `Conflict`.
    pub async fn create(&self, new: NewProduct) -> Result<product::Model, AppError> {
        Ok(self.product_dao.create_product(new).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<product::Model>, AppError> {
        Ok(self.product_dao.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use crate::services::ServiceContext;
    use crate::test_helpers::{sample_product, test_db};

    #[tokio::test]
    async fn duplicate_sku_surfaces_as_conflict() {
        let db = test_db().await;
        let products = ServiceContext::new(&db).product();
        products
            .create(sample_product("A1", "Widget"))
            .await
            .expect("first product should be created");

        let err = products
            .create(sample_product("A1", "Gadget"))
            .await
            .expect_err("duplicate sku should fail");
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn store_failures_are_internal_errors() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let err = ServiceContext::new(&db)
            .product()
            .list_all()
            .await
            .expect_err("mocked query should fail");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Database operation failed");
    }
}
