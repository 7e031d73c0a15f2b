use serde::{Deserialize, Serialize};

/// A customer debt. `monto_pendiente` and `estado` are recomputed
/// server-side on every payment; the client never derives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deuda {
    pub id: i64,
    pub cliente_nombre: String,
    pub monto_total: f64,
    pub monto_pagado: f64,
    pub monto_pendiente: f64,
    pub estado: String,
    #[serde(default)]
    pub dias_vencimiento: Option<i64>,
}

impl Deuda {
    /// "pendiente"/"parcial"/"vencida" count as open
    pub fn is_activa(&self) -> bool {
        self.estado != "pagada"
    }
}

/// Body of `GET /api/deudas/` (optionally filtered by `?estado=`).
#[derive(Debug, Clone, Deserialize)]
pub struct DeudasResponse {
    pub total: i64,
    #[serde(default)]
    pub deudas: Vec<Deuda>,
    #[serde(default)]
    pub total_pendiente: f64,
    #[serde(default)]
    pub total_pagadas: f64,
}

/// Body of single-debt responses (`{message?, deuda}`).
#[derive(Debug, Clone, Deserialize)]
pub struct DeudaResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub deuda: Deuda,
}
