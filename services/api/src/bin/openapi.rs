//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI document of the account and reading endpoints to disk,
//! so front ends can generate a client without starting the server.
//!
//! Usage: `openapi [OUTPUT]`, defaulting to `openapi.json`.

use api_lib::web::rest::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "openapi.json".to_string());
    let doc = ApiDoc::openapi();
    std::fs::write(&path, doc.to_pretty_json()?)?;
    println!("Wrote {} endpoints to {}", doc.paths.paths.len(), path);
    Ok(())
}
