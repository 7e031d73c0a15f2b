use serde::{Deserialize, Serialize};

/// A business expense (`/api/gastos/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gasto {
    pub id: i64,
    pub descripcion: String,
    #[serde(default)]
    pub categoria: Option<String>,
    pub monto: f64,
    #[serde(default)]
    pub comprobante: Option<String>,
    #[serde(default)]
    pub fecha_gasto: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GastosResponse {
    #[serde(default)]
    pub gastos: Vec<Gasto>,
    pub total: i64,
}

/// Body of a successful `POST /api/gastos/`.
#[derive(Debug, Clone, Deserialize)]
pub struct GastoCreado {
    pub message: String,
    pub gasto: Gasto,
}
