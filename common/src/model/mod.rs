pub mod authorization;
pub mod record;
pub mod shim;
