//! Hashing utilities

use sha2::{Sha256, Digest};

use crate::constants::discriminators::{ANCHOR_DISCRIMINATOR_LEN, ANCHOR_DISCRIMINATOR_NAMESPACE};

/// Generate an Anchor instruction discriminator from a snake_case instruction name
pub fn generate_anchor_discriminator(name: &str) -> [u8; ANCHOR_DISCRIMINATOR_LEN] {
    let namespace = format!("{}:{}", ANCHOR_DISCRIMINATOR_NAMESPACE, name);
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    let hash = hasher.finalize();
    
    let mut result = [0u8; ANCHOR_DISCRIMINATOR_LEN];
    result.copy_from_slice(&hash[..ANCHOR_DISCRIMINATOR_LEN]);
    result
}
