pub mod application {
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod update;
    }
    pub mod coupon {
        pub mod create;
        pub mod delete;
        pub mod update;
    }
    pub mod order {
        pub mod check_stock;
    }
    pub mod product {
        pub mod catalog_cache;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod search_by_category;
        pub mod update;
    }
}

pub mod domain {
    pub mod cache;
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod update;
        }
    }
    pub mod coupon {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod update;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod stock;
        pub mod use_cases {
            pub mod check_stock;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod search_by_category;
            pub mod update;
        }
    }
}

#[cfg(test)]
mod test_support;
