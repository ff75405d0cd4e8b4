//! Development-only password handling.

/// Tags a plaintext password so seeded accounts carry a recognizable
/// "hashed" form.
///
/// Deterministic and trivially reversible, a development stand-in only.
/// It must never guard real credentials; swap in a real password hash
/// before pointing authentication at production data.
pub fn hash_password(password: &str) -> String {
    format!("hashed_{password}")
}
