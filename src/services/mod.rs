// Parser console services
// Services provide the engine's core functionality: statistics, filtering, export, validation, generation, settings.

pub mod aggregator;
pub mod export_serializer;
pub mod parsing_generator;
pub mod query_engine;
pub mod settings_engine;
pub mod validator;
