use serde::{Deserialize, Serialize};

/// A product in the company inventory (`/api/inventario/`).
///
/// `ganancia_unitaria` is computed server-side and rendered as received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub sku: String,
    #[serde(default)]
    pub categoria: Option<String>,
    pub costo_unitario: f64,
    pub precio_venta: f64,
    #[serde(default)]
    pub cantidad_disponible: i64,
    #[serde(default)]
    pub ganancia_unitaria: f64,
    #[serde(default)]
    pub proveedor: Option<String>,
    #[serde(default)]
    pub fecha_compra: Option<String>,
}

/// Body of `GET /api/inventario/`.
#[derive(Debug, Clone, Deserialize)]
pub struct InventarioResponse {
    pub total: i64,
    #[serde(default)]
    pub productos: Vec<Producto>,
}

/// Body of single-product responses (`{message?, producto}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProductoResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub producto: Producto,
}
