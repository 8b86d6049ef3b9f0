// ABOUTME: Token command: mints an HS256 bearer token for a user
// ABOUTME: Requires JWT_SECRET so the running server accepts the token

use anyhow::{anyhow, Result};
use trainplan_server::{auth::AuthManager, constants::env_config};

/// Print a signed token for `user_id`
pub fn run(user_id: &str, expiry_hours: Option<i64>) -> Result<()> {
    let secret = env_config::jwt_secret()
        .ok_or_else(|| anyhow!("JWT_SECRET must be set to mint tokens the server will accept"))?;
    let expiry_hours = match expiry_hours {
        Some(hours) => hours,
        None => env_config::jwt_expiry_hours().parse()?,
    };

    let token = AuthManager::new(secret.into_bytes(), expiry_hours).generate_token(user_id)?;
    println!("{token}");
    Ok(())
}
