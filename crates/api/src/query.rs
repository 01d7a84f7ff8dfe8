//! Query-string parameter types for the search endpoints.

use serde::Deserialize;

/// `?name=`
#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: String,
}

/// `?nombre=`
#[derive(Debug, Deserialize)]
pub struct NombreParams {
    pub nombre: String,
}

/// `?tipo=`
#[derive(Debug, Deserialize)]
pub struct TipoParams {
    pub tipo: String,
}
