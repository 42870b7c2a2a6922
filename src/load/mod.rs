mod errors;
mod loader;

pub use errors::LoadError;
pub use loader::Loader;
