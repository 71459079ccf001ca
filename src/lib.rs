pub mod details;
pub mod document;
pub mod index;
pub mod schema;
pub mod search;
pub mod service;
pub mod util;

pub use index::ApiIndex;
pub use service::SwaggerService;
