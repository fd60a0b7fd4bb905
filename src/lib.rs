// Modules
pub mod attribute;
pub mod config;
pub mod constants;
pub mod errors;
pub mod example;
pub mod node;
pub mod predict;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use attribute::Attribute;
pub use config::TreeConfig;
pub use errors::TreeError;
pub use example::Example;
pub use node::Node;
pub use predict::Classification;
pub use tree::DecisionTree;
