// Storage module - graph provider initialization
pub mod initializer;

pub use initializer::initialize_provider;
