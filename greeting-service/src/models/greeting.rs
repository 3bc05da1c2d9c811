use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_NAME_LENGTH: u64 = 256;

/// Response body of `GET /greeting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub id: u64,
    pub content: String,
}

/// Query string of `GET /greeting`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct GreetingParams {
    #[validate(length(max = MAX_NAME_LENGTH, message = "Name must be at most 256 characters"))]
    pub name: Option<String>,
}
