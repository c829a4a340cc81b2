// Interface adapters: HTTP protocol, CORS interception and request handlers.

pub mod cors;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
