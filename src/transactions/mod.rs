pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;
pub mod util;

pub static PRICE_RANGES: [(i32, Option<i32>); 10] = [
    (0, Some(100)),
    (101, Some(200)),
    (201, Some(300)),
    (301, Some(400)),
    (401, Some(500)),
    (501, Some(600)),
    (601, Some(700)),
    (701, Some(800)),
    (801, Some(900)),
    (901, None),
];
