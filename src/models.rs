use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterReq {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane.doe@hospital.com", format = "email")]
    pub email: String,
    #[schema(example = "Str0ng!Pass")]
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "jane.doe@hospital.com", format = "email")]
    pub email: String,
    #[schema(example = "Str0ng!Pass")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Credential id the token was issued for.
    pub sub: String,
    pub email: String,
    pub exp: usize,
    pub jti: String,
}
