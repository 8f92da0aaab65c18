use std::sync::Arc;
use std::time::Duration;

use cache::InMemoryCacheStore;
use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::coupon::repository::CouponRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::coupon::create::CreateCouponUseCaseImpl;
use business::application::coupon::delete::DeleteCouponUseCaseImpl;
use business::application::coupon::update::UpdateCouponUseCaseImpl;
use business::application::order::check_stock::CheckStockUseCaseImpl;
use business::application::product::catalog_cache::CatalogCache;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search_by_category::SearchProductsByCategoryUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::category::routes::CategoryApi;
use crate::api::coupon::routes::CouponApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::product::routes::ProductApi;
use crate::config::cache_config::CacheConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub category_api: CategoryApi,
    pub coupon_api: CouponApi,
    pub order_api: OrderApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, cache_config: &CacheConfig) -> Self {
        let catalog_logger = Arc::new(TracingLogger::new("catalog"));
        let category_logger = Arc::new(TracingLogger::new("categories"));
        let coupon_logger = Arc::new(TracingLogger::new("coupons"));
        let order_logger = Arc::new(TracingLogger::new("orders"));
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let coupon_repository = Arc::new(CouponRepositoryPostgres::new(pool));

        let cache_store = Arc::new(InMemoryCacheStore::new(cache_config.ttl));
        spawn_cache_sweeper(cache_store.clone(), cache_config.ttl);

        let catalog = Arc::new(CatalogCache {
            repository: product_repository.clone(),
            store: cache_store,
            logger: catalog_logger.clone(),
        });

        // Product use cases
        let create_product = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            catalog: catalog.clone(),
            logger: catalog_logger.clone(),
        });
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            catalog: catalog.clone(),
            logger: catalog_logger.clone(),
        });
        let get_product_by_id = Arc::new(GetProductByIdUseCaseImpl {
            catalog: catalog.clone(),
            logger: catalog_logger.clone(),
        });
        let update_product = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            catalog: catalog.clone(),
            logger: catalog_logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            catalog: catalog.clone(),
            logger: catalog_logger.clone(),
        });
        let search_products = Arc::new(SearchProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            logger: catalog_logger,
        });

        // Category use cases
        let create_category = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: category_logger.clone(),
        });
        let get_all_categories = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: category_logger.clone(),
        });
        let update_category = Arc::new(UpdateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: category_logger.clone(),
        });
        let delete_category = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository,
            catalog,
            logger: category_logger,
        });

        // Coupon use cases
        let create_coupon = Arc::new(CreateCouponUseCaseImpl {
            repository: coupon_repository.clone(),
            product_repository: product_repository.clone(),
            logger: coupon_logger.clone(),
        });
        let update_coupon = Arc::new(UpdateCouponUseCaseImpl {
            repository: coupon_repository.clone(),
            product_repository: product_repository.clone(),
            logger: coupon_logger.clone(),
        });
        let delete_coupon = Arc::new(DeleteCouponUseCaseImpl {
            repository: coupon_repository,
            logger: coupon_logger,
        });

        // Stock guard reads the repository directly, never the cache
        let check_stock = Arc::new(CheckStockUseCaseImpl {
            repository: product_repository,
            logger: order_logger,
        });

        Self {
            health_api,
            product_api: ProductApi::new(
                create_product,
                get_all_products,
                get_product_by_id,
                update_product,
                delete_product,
            ),
            category_api: CategoryApi::new(
                create_category,
                get_all_categories,
                update_category,
                delete_category,
                search_products,
            ),
            coupon_api: CouponApi::new(create_coupon, update_coupon, delete_coupon),
            order_api: OrderApi::new(check_stock),
        }
    }
}

/// Drops aged-out entries that are never read again.
fn spawn_cache_sweeper(store: Arc<InMemoryCacheStore>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            store.evict_expired();
            tracing::debug!(entries = store.len(), "catalog cache swept");
        }
    });
}
