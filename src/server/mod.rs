pub mod app;
mod deserializers;
mod pagination;
mod routes;

pub use pagination::QUESTIONS_PER_PAGE;
