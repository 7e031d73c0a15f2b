use serde::{Deserialize, Serialize};

/// One line of a sale, joined server-side with the product name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VentaItem {
    pub id: i64,
    pub producto_nombre: String,
    pub cantidad: i64,
    pub precio_unitario: f64,
    pub subtotal: f64,
}

/// A sale as listed by `GET /api/ventas/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venta {
    pub id: i64,
    #[serde(default)]
    pub cliente_nombre: Option<String>,
    #[serde(default)]
    pub cliente_email: Option<String>,
    pub total: f64,
    pub tipo_pago: String,
    pub estado: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub items: Vec<VentaItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VentasResponse {
    #[serde(default)]
    pub ventas: Vec<Venta>,
    pub total: i64,
}

/// Body of a successful `POST /api/ventas/`. The backend answers with a
/// trimmed-down venta plus the profit it computed for this sale.
#[derive(Debug, Clone, Deserialize)]
pub struct VentaCreada {
    pub message: String,
    pub venta: VentaResumen,
    pub ganancia: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VentaResumen {
    pub id: i64,
    #[serde(default)]
    pub cliente_nombre: Option<String>,
    pub total: f64,
    pub tipo_pago: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ventas_response_with_items() {
        let json = r#"{
            "ventas": [{
                "id": 9,
                "cliente_nombre": "Pedro",
                "cliente_email": "",
                "cliente_telefono": "",
                "subtotal": 50000.0,
                "total": 50000.0,
                "tipo_pago": "credito",
                "estado": "completada",
                "created_at": "2025-01-15T14:30:00",
                "items": [{
                    "id": 11,
                    "venta_id": 9,
                    "inventario_id": 4,
                    "producto_nombre": "Camiseta blanca",
                    "cantidad": 2,
                    "precio_unitario": 25000.0,
                    "subtotal": 50000.0
                }]
            }],
            "total": 1
        }"#;

        let resp: VentasResponse = serde_json::from_str(json).expect("parse ventas");
        assert_eq!(resp.total, 1);
        assert_eq!(resp.ventas[0].items[0].producto_nombre, "Camiseta blanca");
        assert_eq!(resp.ventas[0].tipo_pago, "credito");
    }

    #[test]
    fn test_parse_venta_creada() {
        let json = r#"{
            "message": "Venta creada exitosamente",
            "venta": {"id": 10, "cliente_nombre": "Ana", "total": 25000.0, "tipo_pago": "contado"},
            "ganancia": 13000.0
        }"#;

        let creada: VentaCreada = serde_json::from_str(json).expect("parse venta creada");
        assert_eq!(creada.venta.id, 10);
        assert_eq!(creada.ganancia, 13000.0);
    }
}
