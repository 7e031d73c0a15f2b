//! Data models for the DALU backend payloads.
//!
//! Field names match the backend's JSON verbatim (the API is already
//! snake_case Spanish), so no serde renames are needed. List endpoints
//! wrap their collections (`{total, productos}`, `{ventas, total}`, ...);
//! each wrapper gets its own response struct.

pub mod balance;
pub mod deuda;
pub mod gasto;
pub mod producto;
pub mod usuario;
pub mod venta;

pub use balance::Balance;
pub use deuda::{Deuda, DeudaResponse, DeudasResponse};
pub use gasto::{Gasto, GastoCreado, GastosResponse};
pub use producto::{InventarioResponse, Producto, ProductoResponse};
pub use usuario::Usuario;
pub use venta::{Venta, VentaCreada, VentaItem, VentaResumen, VentasResponse};
