use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authentication response (register/login success)
///
/// Registration also credits the starting balance; the service reports it in
/// `message` ("Регистрация успешна! +1000₽ на счёт").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
    pub message: String,
}

/// User profile (public, safe to persist client-side)
///
/// `balance` is in minor currency units and is mutated only by the service as
/// a side effect of deal payment/completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub balance: i64,
    pub rating: f64,
    pub reviews_count: i64,
}

/// Error response (any non-2xx status from any service group)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_round_trips() {
        let json = r#"{
            "token": "abc123",
            "user": {
                "id": 7,
                "username": "alice",
                "email": "alice@example.com",
                "balance": 1000,
                "rating": 4.5,
                "reviews_count": 12
            },
            "message": "Вход выполнен успешно"
        }"#;

        let parsed: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.token, "abc123");
        assert_eq!(parsed.user.id, 7);
        assert_eq!(parsed.user.balance, 1000);
        assert_eq!(parsed.user.rating, 4.5);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["user"]["username"], "alice");
    }

    #[test]
    fn error_response_exposes_service_text() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"error":"Неверный email или пароль"}"#).unwrap();
        assert_eq!(parsed.error, "Неверный email или пароль");
    }
}
