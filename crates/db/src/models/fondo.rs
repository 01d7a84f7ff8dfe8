//! Funding source (fondo) model and DTOs.

use idi_core::patch::Patch;
use idi_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `fondos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Fondo {
    pub id: DbId,
    pub nombre: Option<String>,
    pub inicio: Option<Date>,
    pub cierre: Option<Date>,
    pub financiamiento: Option<String>,
    pub plazo: Option<String>,
    pub objetivo: Option<String>,
    pub trl: Option<i32>,
    pub crl: Option<i32>,
    pub team: Option<i32>,
    pub brl: Option<i32>,
    pub iprl: Option<i32>,
    pub frl: Option<i32>,
    pub tipo: Option<DbId>,
    pub req: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateFondo {
    #[validate(length(max = 100))]
    pub nombre: Option<String>,
    pub inicio: Option<Date>,
    pub cierre: Option<Date>,
    #[validate(length(max = 20))]
    pub financiamiento: Option<String>,
    #[validate(length(max = 20))]
    pub plazo: Option<String>,
    pub objetivo: Option<String>,
    pub trl: Option<i32>,
    pub crl: Option<i32>,
    pub team: Option<i32>,
    pub brl: Option<i32>,
    pub iprl: Option<i32>,
    pub frl: Option<i32>,
    pub tipo: Option<DbId>,
    pub req: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateFondo {
    #[validate(length(max = 100))]
    pub nombre: Patch<String>,
    pub inicio: Patch<Date>,
    pub cierre: Patch<Date>,
    #[validate(length(max = 20))]
    pub financiamiento: Patch<String>,
    #[validate(length(max = 20))]
    pub plazo: Patch<String>,
    pub objetivo: Patch<String>,
    pub trl: Patch<i32>,
    pub crl: Patch<i32>,
    pub team: Patch<i32>,
    pub brl: Patch<i32>,
    pub iprl: Patch<i32>,
    pub frl: Patch<i32>,
    pub tipo: Patch<DbId>,
    pub req: Patch<String>,
}

impl From<CreateFondo> for UpdateFondo {
    fn from(input: CreateFondo) -> Self {
        Self {
            nombre: input.nombre.into(),
            inicio: input.inicio.into(),
            cierre: input.cierre.into(),
            financiamiento: input.financiamiento.into(),
            plazo: input.plazo.into(),
            objetivo: input.objetivo.into(),
            trl: input.trl.into(),
            crl: input.crl.into(),
            team: input.team.into(),
            brl: input.brl.into(),
            iprl: input.iprl.into(),
            frl: input.frl.into(),
            tipo: input.tipo.into(),
            req: input.req.into(),
        }
    }
}
