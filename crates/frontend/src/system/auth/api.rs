use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_utils::{ApiClient, ApiError};

/// Login with username and password
pub async fn login(
    client: &ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    client.post("/api/system/auth/login", &request).await
}

/// Get current user info; the client must carry the session
pub async fn get_current_user(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client.get("/api/system/auth/me").await
}

/// Best-effort server-side logout
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.post_unit("/api/system/auth/logout", &()).await
}
