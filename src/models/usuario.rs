use serde::{Deserialize, Serialize};

/// A user account. The login payload ships `id/username/email/rol`;
/// `/api/auth/verify` additionally includes `empresa_id` and `activo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub rol: Option<String>,
    #[serde(default)]
    pub empresa_id: Option<i64>,
    #[serde(default)]
    pub activo: Option<bool>,
}

impl Usuario {
    pub fn display_rol(&self) -> &str {
        self.rol.as_deref().unwrap_or("usuario")
    }
}
