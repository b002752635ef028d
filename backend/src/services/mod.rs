pub mod embedded;
pub mod proxy;
