pub mod links;
pub mod model;
pub mod resolver;
