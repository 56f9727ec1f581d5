use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StoreSession {
    pub token: String,
}
