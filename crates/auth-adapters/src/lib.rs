//! # auth-adapters
//!
//! `AccessGate` implementations. The board ships exactly one: a plaintext
//! shared-secret comparison. The secret is a capability, not an identity:
//! there are no accounts, no sessions, and no trust boundary worth a
//! stronger scheme. Anything stronger (hashing, rotation) replaces this
//! adapter without touching the workflows.

use domains::models::Post;
use domains::traits::AccessGate;

/// Compares the entered key against the post's stored key, both trimmed.
///
/// An empty entered key matches only an empty stored key. Losing the key
/// permanently locks out edit and delete for that post; there is no
/// recovery path.
#[derive(Debug, Default)]
pub struct PlainSecretGate;

impl PlainSecretGate {
    pub fn new() -> Self {
        Self
    }
}

impl AccessGate for PlainSecretGate {
    fn authorize(&self, post: &Post, credential: &str) -> bool {
        secrets_match(credential, &post.secret_key)
    }
}

/// Whitespace-trimmed equality of the entered key and the stored key.
pub fn secrets_match(entered: &str, stored: &str) -> bool {
    entered.trim() == stored.trim()
}
