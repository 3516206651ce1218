pub mod seed_transaction;
