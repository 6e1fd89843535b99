use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::debug;

use super::{IdentityError, IdentityProvider};
use crate::models::user::User;

/// Resolves sessions written by the identity service as `session:{token}` → JSON `User`.
/// Key expiry is owned by the writer; a missing key means the session is gone.
#[derive(Clone)]
pub struct RedisSessionProvider {
    conn: MultiplexedConnection,
}

impl RedisSessionProvider {
    pub async fn connect(client: &redis::Client) -> Result<Self, IdentityError> {
        let conn = client.get_multiplexed_async_connection().await?;
        Ok(Self { conn })
    }
}

pub(crate) fn session_key(token: &str) -> String {
    format!("session:{token}")
}

#[async_trait]
impl IdentityProvider for RedisSessionProvider {
    async fn current_user(&self, session_token: &str) -> Result<Option<User>, IdentityError> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = conn.get(session_key(session_token)).await?;

        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => {
                debug!("No session found for presented token");
                Ok(None)
            }
        }
    }
}
