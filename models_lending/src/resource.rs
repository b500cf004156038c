use serde::{Deserialize, Serialize};
use sqlx::Type;
use strum::Display;
use utoipa::ToSchema;

/// What kind of item a catalog entry is.
///
/// The wire and column values keep the catalog's French vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema, Display)]
pub enum ResourceKind {
    #[serde(rename = "Livre")]
    #[sqlx(rename = "Livre")]
    #[strum(serialize = "Livre")]
    Livre,
    #[serde(rename = "Jeu")]
    #[sqlx(rename = "Jeu")]
    #[strum(serialize = "Jeu")]
    Jeu,
}

/// Availability of a catalog entry.
///
/// `Emprunte` is only ever set by loan creation; `Indisponible` is an
/// operator decision (broken, lost, withdrawn).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema, Display)]
pub enum ResourceStatus {
    #[serde(rename = "disponible")]
    #[sqlx(rename = "disponible")]
    #[strum(serialize = "disponible")]
    Disponible,
    #[serde(rename = "indisponible")]
    #[sqlx(rename = "indisponible")]
    #[strum(serialize = "indisponible")]
    Indisponible,
    #[serde(rename = "emprunté")]
    #[sqlx(rename = "emprunté")]
    #[strum(serialize = "emprunté")]
    Emprunte,
}

/// A lendable catalog entry (book or board game).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub kind: ResourceKind,
    pub status: ResourceStatus,
}
