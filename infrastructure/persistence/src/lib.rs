pub mod db;
mod errors;
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod coupon {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
