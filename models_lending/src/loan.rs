use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use strum::Display;
use utoipa::ToSchema;

/// Lifecycle state of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema, Display)]
pub enum LoanStatus {
    #[serde(rename = "en_cours")]
    #[sqlx(rename = "en_cours")]
    #[strum(serialize = "en_cours")]
    EnCours,
    #[serde(rename = "retourné")]
    #[sqlx(rename = "retourné")]
    #[strum(serialize = "retourné")]
    Retourne,
}

/// How the member borrows the resource.
///
/// `SurPlace` loans are consulted on site and due back the same instant;
/// `AEmporter` loans leave the building and are due in 15 days. The choice
/// only influences the due date and is not persisted on the loan row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display)]
pub enum BorrowType {
    #[serde(rename = "sur_place")]
    #[strum(serialize = "sur_place")]
    SurPlace,
    #[serde(rename = "a_emporter")]
    #[strum(serialize = "a_emporter")]
    AEmporter,
}

/// A borrow record for a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Loan {
    pub id: i64,
    pub user_id: i64,
    pub resource_id: i64,
    /// When the loan was taken out
    pub loan_date: DateTime<Utc>,
    /// When the resource is due back
    pub return_date: DateTime<Utc>,
    pub status: LoanStatus,
}
