//! Knowledge-transfer readiness (KTH) assessment model and DTOs.
//!
//! Each assessment scores a project on six readiness levels: technology
//! (trl), customer (crl), team, business (brl), IP (iprl) and funding (frl).

use idi_core::patch::Patch;
use idi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `kth` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Kth {
    pub id_kth: DbId,
    pub id_proyecto: DbId,
    pub trl: Option<i32>,
    pub crl: Option<i32>,
    pub team: Option<i32>,
    pub brl: Option<i32>,
    pub iprl: Option<i32>,
    pub frl: Option<i32>,
    pub fecha_creacion: Option<Timestamp>,
}

/// DTO for creating (or fully replacing) an assessment.
///
/// `fecha_creacion` defaults to the current time when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateKth {
    pub id_proyecto: DbId,
    pub trl: Option<i32>,
    pub crl: Option<i32>,
    pub team: Option<i32>,
    pub brl: Option<i32>,
    pub iprl: Option<i32>,
    pub frl: Option<i32>,
    pub fecha_creacion: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateKth {
    pub id_proyecto: Patch<DbId>,
    pub trl: Patch<i32>,
    pub crl: Patch<i32>,
    pub team: Patch<i32>,
    pub brl: Patch<i32>,
    pub iprl: Patch<i32>,
    pub frl: Patch<i32>,
    pub fecha_creacion: Patch<Timestamp>,
}

impl From<CreateKth> for UpdateKth {
    fn from(input: CreateKth) -> Self {
        Self {
            id_proyecto: Patch::Value(input.id_proyecto),
            trl: input.trl.into(),
            crl: input.crl.into(),
            team: input.team.into(),
            brl: input.brl.into(),
            iprl: input.iprl.into(),
            frl: input.frl.into(),
            // A replacement without a date keeps the recorded creation time.
            fecha_creacion: input.fecha_creacion.map_or(Patch::Absent, Patch::Value),
        }
    }
}
