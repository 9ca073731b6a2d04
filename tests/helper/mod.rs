pub mod project;
pub mod toolchain;
