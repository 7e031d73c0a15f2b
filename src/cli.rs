//! Command-line interface definition.
//!
//! One subcommand per backend screen; every handler talks to the backend
//! through the `ApiClient` capability surface only.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "dalu", about = "Terminal client for the DALU bookkeeping API", version)]
pub struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, env = "DALU_API_URL", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in and persist the session
    Login {
        #[arg(short, long)]
        username: Option<String>,

        /// Remember the password in the OS keychain
        #[arg(long)]
        remember: bool,

        /// Drop the remembered password and prompt again
        #[arg(long)]
        forget: bool,
    },

    /// Create an account and company, then log in
    Registro {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        /// Company name
        #[arg(long, default_value = "Mi Empresa")]
        empresa: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Manage inventory products
    #[command(subcommand)]
    Inventario(InventarioCommand),

    /// Manage sales
    #[command(subcommand)]
    Ventas(VentasCommand),

    /// Manage expenses
    #[command(subcommand)]
    Gastos(GastosCommand),

    /// Manage customer debts
    #[command(subcommand)]
    Deudas(DeudasCommand),

    /// Show the financial dashboard
    Balance,

    /// Check that the backend is reachable
    Health,
}

#[derive(Subcommand)]
pub enum InventarioCommand {
    /// List products
    List,

    /// Add a product
    Add {
        nombre: String,

        #[arg(long)]
        sku: String,

        /// Unit cost
        #[arg(long)]
        costo: f64,

        /// Sale price
        #[arg(long)]
        precio: f64,

        /// Initial stock
        #[arg(long, default_value_t = 0)]
        cantidad: i64,

        #[arg(long)]
        categoria: Option<String>,

        #[arg(long)]
        descripcion: Option<String>,
    },

    /// Update a product's price, cost, stock or name
    Update {
        id: i64,

        #[arg(long)]
        precio: Option<f64>,

        #[arg(long)]
        costo: Option<f64>,

        #[arg(long)]
        cantidad: Option<i64>,

        #[arg(long)]
        nombre: Option<String>,
    },

    /// Delete a product
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum VentasCommand {
    /// List sales with their line items
    List,

    /// Record a sale (credit sales create a debt automatically)
    Add {
        /// Product id
        producto: i64,

        cantidad: i64,

        /// Customer name
        #[arg(long)]
        cliente: String,

        #[arg(long, value_enum, default_value_t = TipoPago::Contado)]
        pago: TipoPago,

        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TipoPago {
    Contado,
    Credito,
    Transferencia,
}

impl TipoPago {
    pub fn as_str(self) -> &'static str {
        match self {
            TipoPago::Contado => "contado",
            TipoPago::Credito => "credito",
            TipoPago::Transferencia => "transferencia",
        }
    }
}

#[derive(Subcommand)]
pub enum GastosCommand {
    /// List expenses
    List,

    /// Record an expense
    Add {
        descripcion: String,

        monto: f64,

        #[arg(long)]
        categoria: Option<String>,

        /// Invoice or receipt number
        #[arg(long)]
        comprobante: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum DeudasCommand {
    /// List debts
    List {
        #[arg(long, value_enum, default_value_t = EstadoFiltro::Activas)]
        estado: EstadoFiltro,
    },

    /// Register a debt
    Add {
        /// Customer name
        cliente: String,

        monto: f64,

        /// Amount already paid
        #[arg(long)]
        pagado: Option<f64>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        vence: Option<String>,

        #[arg(long)]
        descripcion: Option<String>,
    },

    /// Register a payment against a debt
    Abonar { id: i64, monto: f64 },
}

/// Filter accepted by `GET /api/deudas/?estado=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EstadoFiltro {
    Activas,
    Pagadas,
    Todas,
}

impl EstadoFiltro {
    pub fn as_str(self) -> &'static str {
        match self {
            EstadoFiltro::Activas => "activas",
            EstadoFiltro::Pagadas => "pagadas",
            EstadoFiltro::Todas => "todas",
        }
    }
}
