pub mod api;
pub mod cli;
pub mod cnpj;
pub mod config;
pub mod counter;
pub mod error;
pub mod lookup;
pub mod output;
pub mod progress;
