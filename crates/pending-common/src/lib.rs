pub mod concurrency;
pub mod service;
