//! JSON-RPC client methods and URL utilities.

pub mod admin;
pub mod evm;
pub mod health;
pub mod info;
pub mod p;
pub mod url;
pub mod x;
