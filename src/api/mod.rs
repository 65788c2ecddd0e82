pub mod client;
pub mod deserializers;
pub mod escavador;
pub mod types;

pub use client::{ClientConfig, ProceedingsApi, DEFAULT_BASE_URL};
pub use escavador::EscavadorClient;
pub use types::{CnpjSearch, Envolvido, ProceedingsPage};
