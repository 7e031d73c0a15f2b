//! Screen controllers: one handler per subcommand.
//!
//! Each handler builds its request through the `ApiClient` capability
//! surface (`get/post/put/delete/is_authenticated/logout`) and owns its
//! own rendering; there is no shared screen state.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::api::{ApiClient, ApiError, Navigator};
use crate::auth::{CredentialStore, FileSessionStore, Session};
use crate::cli::{
    Args, Command, DeudasCommand, GastosCommand, InventarioCommand, TipoPago, VentasCommand,
};
use crate::config::Config;
use crate::models::{
    Balance, DeudaResponse, DeudasResponse, GastoCreado, GastosResponse, InventarioResponse,
    ProductoResponse, VentaCreada, VentasResponse,
};
use crate::utils::{format_fecha, format_money, format_optional, truncate};

/// CLI stand-in for the browser redirect to `/login`.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn redirect_to_login(&self) {
        eprintln!("Para continuar, inicia sesión con `dalu login`.");
    }
}

pub async fn run(args: Args) -> Result<()> {
    let mut config = Config::load().context("Failed to load config")?;
    let base_url = config.resolve_base_url(args.api_url.as_deref());
    debug!(base_url = %base_url, "Using backend");

    let store = Arc::new(FileSessionStore::new(Config::app_dir()?));
    let session = Session::new(store);
    let client = ApiClient::new(base_url, session.clone(), Arc::new(ConsoleNavigator))?;

    dispatch(&client, &mut config, args.command)
        .await
        .map_err(|err| match err.downcast_ref::<ApiError>() {
            Some(api_err) => anyhow::anyhow!("{}", describe(api_err)),
            None => err,
        })
}

/// User-facing copy per failure kind.
fn describe(err: &ApiError) -> String {
    match err {
        ApiError::Network(e) => format!("No se pudo contactar el servidor: {}", e),
        ApiError::SessionExpired => {
            "Tu sesión expiró o fue revocada. Inicia sesión de nuevo con `dalu login`.".to_string()
        }
        ApiError::MalformedResponse(detail) => {
            format!("El servidor respondió algo inesperado: {}", detail)
        }
        ApiError::Application(message) => message.clone(),
    }
}

async fn dispatch(client: &ApiClient, config: &mut Config, command: Command) -> Result<()> {
    match command {
        Command::Login {
            username,
            remember,
            forget,
        } => login(client, config, username, remember, forget).await,
        Command::Registro {
            username,
            email,
            empresa,
        } => registro(client, config, &username, &email, &empresa).await,
        Command::Logout => {
            client.logout();
            println!("Sesión cerrada.");
            Ok(())
        }
        Command::Whoami => whoami(client).await,
        Command::Inventario(cmd) => inventario(client, cmd).await,
        Command::Ventas(cmd) => ventas(client, cmd).await,
        Command::Gastos(cmd) => gastos(client, cmd).await,
        Command::Deudas(cmd) => deudas(client, cmd).await,
        Command::Balance => balance(client).await,
        Command::Health => health(client).await,
    }
}

// ===== Auth =====

async fn login(
    client: &ApiClient,
    config: &mut Config,
    username: Option<String>,
    remember: bool,
    forget: bool,
) -> Result<()> {
    let username = match username.or_else(|| config.last_username.clone()) {
        Some(u) => u,
        None => prompt("Usuario: ")?,
    };

    // `--forget` drops the remembered password so a bad one stored via
    // `--remember` cannot keep winning over the prompt
    if forget {
        if let Err(e) = CredentialStore::forget(&username) {
            debug!(error = %e, "No remembered password to forget");
        }
    }

    // Remembered password first; fall back to an interactive prompt
    let password = match CredentialStore::load(&username) {
        Ok(stored) if !forget => stored,
        _ => rpassword::prompt_password("Contraseña: ")?,
    };

    let data = client.login(&username, &password).await?;

    if remember {
        if let Err(e) = CredentialStore::store(&username, &password) {
            eprintln!("No se pudo guardar la contraseña en el llavero: {}", e);
        }
    }

    config.last_username = Some(username);
    config.save().context("Failed to save config")?;

    println!(
        "Bienvenido, {} ({}) - empresa #{}",
        data.usuario.username,
        data.usuario.display_rol(),
        data.empresa_id
    );
    Ok(())
}

async fn registro(
    client: &ApiClient,
    config: &mut Config,
    username: &str,
    email: &str,
    empresa: &str,
) -> Result<()> {
    let password = rpassword::prompt_password("Contraseña: ")?;
    let confirm = rpassword::prompt_password("Confirmar contraseña: ")?;
    if password != confirm {
        anyhow::bail!("Las contraseñas no coinciden");
    }

    let data = client.registro(username, email, &password, empresa).await?;

    config.last_username = Some(username.to_string());
    config.save().context("Failed to save config")?;

    println!(
        "Cuenta creada: {} - empresa #{}",
        data.usuario.username, data.empresa_id
    );
    Ok(())
}

async fn whoami(client: &ApiClient) -> Result<()> {
    if !client.is_authenticated() {
        println!("No has iniciado sesión. Usa `dalu login`.");
        return Ok(());
    }

    let usuario = client.verify().await?;
    println!("Usuario:  {}", usuario.username);
    println!("Email:    {}", usuario.email);
    println!("Rol:      {}", usuario.display_rol());
    if let Some(empresa_id) = usuario.empresa_id {
        println!("Empresa:  #{}", empresa_id);
    }
    Ok(())
}

// ===== Inventario =====

async fn inventario(client: &ApiClient, cmd: InventarioCommand) -> Result<()> {
    match cmd {
        InventarioCommand::List => {
            let resp: InventarioResponse = client.get_as("/api/inventario/").await?;
            if resp.productos.is_empty() {
                println!("No hay productos.");
                return Ok(());
            }

            println!(
                "{:<5} {:<24} {:<10} {:>12} {:>12} {:>7} {:>12}",
                "ID", "NOMBRE", "SKU", "COSTO", "PRECIO", "STOCK", "GANANCIA/U"
            );
            for p in &resp.productos {
                println!(
                    "{:<5} {:<24} {:<10} {:>12} {:>12} {:>7} {:>12}",
                    p.id,
                    truncate(&p.nombre, 24),
                    truncate(&p.sku, 10),
                    format_money(p.costo_unitario),
                    format_money(p.precio_venta),
                    p.cantidad_disponible,
                    format_money(p.ganancia_unitaria),
                );
            }
            println!("{} producto(s)", resp.total);
        }
        InventarioCommand::Add {
            nombre,
            sku,
            costo,
            precio,
            cantidad,
            categoria,
            descripcion,
        } => {
            let body = json!({
                "nombre": nombre,
                "sku": sku,
                "costo_unitario": costo,
                "precio_venta": precio,
                "cantidad_disponible": cantidad,
                "categoria": categoria,
                "descripcion": descripcion,
            });
            let resp: ProductoResponse = client.post_as("/api/inventario/", &body).await?;
            println!(
                "{} (id {})",
                resp.message.unwrap_or_else(|| "Producto creado".to_string()),
                resp.producto.id
            );
        }
        InventarioCommand::Update {
            id,
            precio,
            costo,
            cantidad,
            nombre,
        } => {
            // Only send the fields the user asked to change
            let mut body = Map::new();
            if let Some(precio) = precio {
                body.insert("precio_venta".to_string(), json!(precio));
            }
            if let Some(costo) = costo {
                body.insert("costo_unitario".to_string(), json!(costo));
            }
            if let Some(cantidad) = cantidad {
                body.insert("cantidad_disponible".to_string(), json!(cantidad));
            }
            if let Some(nombre) = nombre {
                body.insert("nombre".to_string(), json!(nombre));
            }
            if body.is_empty() {
                anyhow::bail!("Nada que actualizar: indica --precio, --costo, --cantidad o --nombre");
            }

            let path = format!("/api/inventario/{}", id);
            let resp: ProductoResponse = client.put_as(&path, &Value::Object(body)).await?;
            println!(
                "Producto {} actualizado: stock {}, precio {}",
                resp.producto.id,
                resp.producto.cantidad_disponible,
                format_money(resp.producto.precio_venta)
            );
        }
        InventarioCommand::Rm { id } => {
            client.delete(&format!("/api/inventario/{}", id)).await?;
            println!("Producto {} eliminado.", id);
        }
    }
    Ok(())
}

// ===== Ventas =====

async fn ventas(client: &ApiClient, cmd: VentasCommand) -> Result<()> {
    match cmd {
        VentasCommand::List => {
            let resp: VentasResponse = client.get_as("/api/ventas/").await?;
            if resp.ventas.is_empty() {
                println!("No hay ventas.");
                return Ok(());
            }

            println!(
                "{:<5} {:<20} {:>12} {:<14} {:<12} {:<12}",
                "ID", "CLIENTE", "TOTAL", "PAGO", "ESTADO", "FECHA"
            );
            for v in &resp.ventas {
                println!(
                    "{:<5} {:<20} {:>12} {:<14} {:<12} {:<12}",
                    v.id,
                    truncate(&format_optional(&v.cliente_nombre, "-"), 20),
                    format_money(v.total),
                    v.tipo_pago,
                    v.estado,
                    format_fecha(&v.created_at),
                );
                for item in &v.items {
                    println!(
                        "      {} x {} @ {}",
                        item.cantidad,
                        truncate(&item.producto_nombre, 30),
                        format_money(item.precio_unitario),
                    );
                }
            }
            println!("{} venta(s)", resp.total);
        }
        VentasCommand::Add {
            producto,
            cantidad,
            cliente,
            pago,
            email,
        } => {
            let body = json!({
                "inventario_id": producto,
                "cantidad": cantidad,
                "cliente_nombre": cliente,
                "tipo_pago": pago.as_str(),
                "cliente_email": email,
            });
            let resp: VentaCreada = client.post_as("/api/ventas/", &body).await?;
            println!(
                "{} - total {} - ganancia {}",
                resp.message,
                format_money(resp.venta.total),
                format_money(resp.ganancia)
            );
            if pago == TipoPago::Credito {
                println!("Venta a crédito: se registró una deuda para el cliente.");
            }
        }
    }
    Ok(())
}

// ===== Gastos =====

async fn gastos(client: &ApiClient, cmd: GastosCommand) -> Result<()> {
    match cmd {
        GastosCommand::List => {
            let resp: GastosResponse = client.get_as("/api/gastos/").await?;
            if resp.gastos.is_empty() {
                println!("No hay gastos.");
                return Ok(());
            }

            println!(
                "{:<5} {:<30} {:<14} {:>12} {:<12}",
                "ID", "DESCRIPCIÓN", "CATEGORÍA", "MONTO", "FECHA"
            );
            for g in &resp.gastos {
                println!(
                    "{:<5} {:<30} {:<14} {:>12} {:<12}",
                    g.id,
                    truncate(&g.descripcion, 30),
                    format_optional(&g.categoria, "-"),
                    format_money(g.monto),
                    format_fecha(&g.fecha_gasto),
                );
            }
            println!("{} gasto(s)", resp.total);
        }
        GastosCommand::Add {
            descripcion,
            monto,
            categoria,
            comprobante,
        } => {
            let body = json!({
                "descripcion": descripcion,
                "monto": monto,
                "categoria": categoria,
                "comprobante": comprobante,
            });
            let resp: GastoCreado = client.post_as("/api/gastos/", &body).await?;
            println!("{} (id {})", resp.message, resp.gasto.id);
        }
    }
    Ok(())
}

// ===== Deudas =====

async fn deudas(client: &ApiClient, cmd: DeudasCommand) -> Result<()> {
    match cmd {
        DeudasCommand::List { estado } => {
            let path = format!("/api/deudas/?estado={}", estado.as_str());
            let resp: DeudasResponse = client.get_as(&path).await?;
            if resp.deudas.is_empty() {
                println!("No hay deudas ({}).", estado.as_str());
                return Ok(());
            }

            println!(
                "{:<5} {:<20} {:>12} {:>12} {:>12} {:<10} {:>6}",
                "ID", "CLIENTE", "TOTAL", "PAGADO", "PENDIENTE", "ESTADO", "VENCE"
            );
            for d in &resp.deudas {
                let vence = d
                    .dias_vencimiento
                    .map(|dias| format!("{}d", dias))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<5} {:<20} {:>12} {:>12} {:>12} {:<10} {:>6}",
                    d.id,
                    truncate(&d.cliente_nombre, 20),
                    format_money(d.monto_total),
                    format_money(d.monto_pagado),
                    format_money(d.monto_pendiente),
                    d.estado,
                    vence,
                );
            }
            println!(
                "Pendiente: {}   Pagado: {}",
                format_money(resp.total_pendiente),
                format_money(resp.total_pagadas)
            );
        }
        DeudasCommand::Add {
            cliente,
            monto,
            pagado,
            vence,
            descripcion,
        } => {
            let body = json!({
                "cliente_nombre": cliente,
                "monto_total": monto,
                "monto_pagado": pagado.unwrap_or(0.0),
                "fecha_vencimiento": vence,
                "descripcion": descripcion,
            });
            let resp: DeudaResponse = client.post_as("/api/deudas/", &body).await?;
            println!(
                "{} (id {}, estado {})",
                resp.message.unwrap_or_else(|| "Deuda registrada".to_string()),
                resp.deuda.id,
                resp.deuda.estado
            );
        }
        DeudasCommand::Abonar { id, monto } => {
            // The backend takes the cumulative paid amount, so read first
            let actual: DeudaResponse = client.get_as(&format!("/api/deudas/{}", id)).await?;
            let body = json!({
                "monto_pagado": actual.deuda.monto_pagado + monto,
            });
            let resp: DeudaResponse = client.put_as(&format!("/api/deudas/{}", id), &body).await?;
            println!(
                "Abono registrado. Pendiente: {} (estado {})",
                format_money(resp.deuda.monto_pendiente),
                resp.deuda.estado
            );
        }
    }
    Ok(())
}

// ===== Balance =====

async fn balance(client: &ApiClient) -> Result<()> {
    let b: Balance = client.get_as("/api/balance/").await?;

    println!("Ingresos:          {}", format_money(b.total_ingresos));
    println!("Egresos:           {}", format_money(b.total_egresos));
    println!("Balance neto:      {}", format_money(b.balance_neto));
    println!("Deudas pendientes: {}", format_money(b.deudas_pendientes));
    println!("Flujo disponible:  {}", format_money(b.flujo_disponible));
    println!(
        "({} ventas, {} gastos, {} deudas pendientes)",
        b.cantidad_ventas, b.cantidad_gastos, b.cantidad_deudas_pendientes
    );
    Ok(())
}

// ===== Health =====

async fn health(client: &ApiClient) -> Result<()> {
    let payload = client.get("/api/health").await?;
    let status = payload
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("desconocido");
    println!("Backend: {}", status);
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_session_expired_points_at_login() {
        let copy = describe(&ApiError::SessionExpired);
        assert!(copy.contains("dalu login"));
    }

    #[test]
    fn test_describe_application_message_verbatim() {
        let copy = describe(&ApiError::Application("Stock insuficiente".to_string()));
        assert_eq!(copy, "Stock insuficiente");
    }

    #[test]
    fn test_describe_malformed_carries_detail() {
        let copy = describe(&ApiError::MalformedResponse("expected value".to_string()));
        assert!(copy.contains("expected value"));
    }
}
