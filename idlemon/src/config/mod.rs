mod engine_options;

pub use engine_options::EngineOptions;
