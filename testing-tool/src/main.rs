use anyhow::Result;
use colored::*;
use reqwest::Client;
use serde_json::json;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚚 Vehicle Tracking Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000".to_string());
    let base_url = base_url.trim_end_matches('/').to_string();
    let client = Client::new();

    println!("{} {}", "🌐 Servidor:".bright_cyan(), base_url);
    test_welcome(&client, &base_url).await?;

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📍 Actualizar ubicación");
        println!("2. 🔍 Consultar ubicación");
        println!("3. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-3): ")?;

        match choice.as_str() {
            "1" => {
                if let Err(e) = test_update_location(&client, &base_url).await {
                    println!("{} {}", "❌ Error:".bright_red(), e);
                }
            }
            "2" => {
                if let Err(e) = test_get_location(&client, &base_url).await {
                    println!("{} {}", "❌ Error:".bright_red(), e);
                }
            }
            "3" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

async fn test_welcome(client: &Client, base_url: &str) -> Result<()> {
    let response = client.get(format!("{}/", base_url)).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        println!("{} {}", "✅ Servidor activo:".bright_green(), body);
    } else {
        println!("{} {} {}", "⚠️ Respuesta inesperada:".bright_yellow(), status, body);
    }
    Ok(())
}

async fn test_update_location(client: &Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "📍 ACTUALIZAR UBICACIÓN".bright_cyan().bold());
    println!("{}", "=======================".bright_cyan());

    let vehicle_id = prompt("Vehicle ID: ")?;
    let latitude: f64 = prompt("Latitud: ")?.parse()?;
    let longitude: f64 = prompt("Longitud: ")?.parse()?;
    let speed = prompt("Velocidad (vacío = 0): ")?;

    let mut payload = json!({
        "vehicleId": vehicle_id,
        "latitude": latitude,
        "longitude": longitude,
    });
    if !speed.is_empty() {
        payload["speed"] = json!(speed.parse::<f64>()?);
    }

    println!("{}", "📦 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response = client
        .post(format!("{}/update-location", base_url))
        .json(&payload)
        .send()
        .await?;
    print_response(response).await
}

async fn test_get_location(client: &Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🔍 CONSULTAR UBICACIÓN".bright_cyan().bold());
    println!("{}", "======================".bright_cyan());

    let vehicle_id = prompt("Vehicle ID: ")?;
    let response = client
        .get(format!("{}/vehicle-location/{}", base_url, vehicle_id))
        .send()
        .await?;
    print_response(response).await
}

async fn print_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    let body = response.text().await?;

    println!("{}", "📥 RESPUESTA:".bright_green().bold());
    let status_line = format!("HTTP {}", status);
    if status.is_success() {
        println!("{}", status_line.bright_green());
    } else {
        println!("{}", status_line.bright_red());
    }

    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json_response) => println!("{}", serde_json::to_string_pretty(&json_response)?),
        Err(_) => println!("{}", body),
    }
    Ok(())
}
