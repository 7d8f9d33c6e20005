// Composition root: configuration, wiring of concrete adapters into the
// use-case handlers, and the REST and GraphQL surfaces.

pub mod auth;
pub mod config;
pub mod graphql;
pub mod http;
pub mod response;
pub mod state;
