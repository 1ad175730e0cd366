use serde::{Deserialize, Serialize};

use crate::horoscope::{Element, ZodiacSign};

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct Success {
    pub success: bool,
}

#[derive(Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct SignInfo {
    pub sign: ZodiacSign,
    pub name: &'static str,
    pub glyph: &'static str,
    pub element: Element,
}

impl From<ZodiacSign> for SignInfo {
    fn from(sign: ZodiacSign) -> Self {
        SignInfo {
            sign,
            name: sign.display_name(),
            glyph: sign.glyph(),
            element: sign.element(),
        }
    }
}
