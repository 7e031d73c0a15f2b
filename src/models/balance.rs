use serde::{Deserialize, Serialize};

/// Financial dashboard computed server-side (`GET /api/balance/`).
/// Rendered as received; no figure is recomputed on the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub total_ingresos: f64,
    pub total_egresos: f64,
    pub balance_neto: f64,
    pub deudas_pendientes: f64,
    pub flujo_disponible: f64,
    pub cantidad_ventas: i64,
    pub cantidad_gastos: i64,
    pub cantidad_deudas_pendientes: i64,
}
