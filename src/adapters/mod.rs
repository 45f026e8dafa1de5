// Adapters layer: concrete implementations for external systems (storage, http).

pub mod http;
pub mod storage;

pub use http::{handle_request, CpfRequest, HttpResponse};
pub use storage::LocalStorage;
