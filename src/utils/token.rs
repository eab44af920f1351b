use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Random secret half of an access token. Only its argon2 hash is stored.
pub fn new_secret() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

/// Bearer token handed to the client: base64(user_id.secret). The id half
/// tells us who is acting, the secret half proves it.
pub fn construct_token(user_id: &Uuid, secret: &str) -> String {
    URL_SAFE_NO_PAD.encode(format!("{user_id}.{secret}"))
}

pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = URL_SAFE_NO_PAD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, secret) = decoded.split_once('.')?;
    let user_id = Uuid::parse_str(id).ok()?;
    if secret.is_empty() {
        return None;
    }
    Some((user_id, secret.to_string()))
}

pub fn encrypt(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(secret: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_identity() {
        let id = new_id();
        let secret = new_secret();
        let token = construct_token(&id, &secret);
        let (got_id, got_secret) = extract_token_parts(&token).unwrap();
        assert_eq!(got_id, id);
        assert_eq!(got_secret, secret);
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        assert!(extract_token_parts("not-base64!!").is_none());
        assert!(extract_token_parts(&URL_SAFE_NO_PAD.encode("no-dot-here")).is_none());
        assert!(extract_token_parts(&URL_SAFE_NO_PAD.encode("bad-uuid.secret")).is_none());
    }

    #[test]
    fn hash_verifies_only_the_original_secret() {
        let secret = new_secret();
        let hash = encrypt(&secret).unwrap();
        assert!(verify(&secret, &hash).unwrap());
        assert!(!verify("tok_other", &hash).unwrap());
    }
}
