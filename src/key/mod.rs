//! Cryptographic key material for signing and authenticating transactions.
pub mod secp256k1;
