pub mod errors;
pub mod service;
pub mod structs;

pub static SEED_DATA_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";
