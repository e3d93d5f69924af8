use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

/// Points-of-interest entry from the static dataset shipped with the site.
/// Field names mirror the published JSON, which is in Portuguese.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub nome: String,
    pub categoria: String,
    pub resumo: String,
    pub descricao: String,
    pub imagem: String,
    pub endereco: String,
    #[serde(rename = "googleMapsUrl")]
    pub google_maps_url: String,
}

impl Location {
    /// Reads the whole dataset once; callers keep it in memory for the
    /// lifetime of the process.
    pub fn load_from_file(path: &Path) -> Result<Vec<Location>, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::InternalServerError(format!("could not read locations dataset: {e}"))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::InternalServerError(format!("could not parse locations dataset: {e}"))
        })
    }
}
