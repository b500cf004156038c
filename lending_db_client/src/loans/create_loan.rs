use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use models_lending::{
    loan::{BorrowType, Loan, LoanStatus},
    resource::{Resource, ResourceStatus},
};
use sqlx::SqlitePool;

/// How long a take-away loan may keep the resource out of the building.
pub const TAKE_AWAY_LOAN_DAYS: i64 = 15;

#[derive(Debug)]
pub struct CreateLoanOptions {
    pub user_id: i64,
    pub resource_id: i64,
    pub borrow_type: BorrowType,
}

#[derive(Debug)]
pub enum CreateLoanOutcome {
    Created(Loan),
    ResourceNotFound,
    ResourceUnavailable,
}

/// Create a loan and mark the resource as borrowed.
///
/// The availability check runs inside the same transaction as both writes,
/// so two members racing for the last copy cannot both win.
pub async fn create_loan(db: &SqlitePool, options: CreateLoanOptions) -> Result<CreateLoanOutcome> {
    let mut transaction = db.begin().await.context("unable to begin transaction")?;

    let resource = sqlx::query_as::<_, Resource>(
        "SELECT id, title, kind, status FROM resources WHERE id = ?1",
    )
    .bind(options.resource_id)
    .fetch_optional(&mut *transaction)
    .await
    .context("unable to look up resource")?;

    let Some(resource) = resource else {
        return Ok(CreateLoanOutcome::ResourceNotFound);
    };
    if resource.status != ResourceStatus::Disponible {
        return Ok(CreateLoanOutcome::ResourceUnavailable);
    }

    let loan_date = Utc::now();
    let return_date = match options.borrow_type {
        BorrowType::AEmporter => loan_date + Duration::days(TAKE_AWAY_LOAN_DAYS),
        // On-site consultation is due back the same instant it starts
        BorrowType::SurPlace => loan_date,
    };

    let loan = sqlx::query_as::<_, Loan>(
        r#"
        INSERT INTO loans (user_id, resource_id, loan_date, return_date, status)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, user_id, resource_id, loan_date, return_date, status
        "#,
    )
    .bind(options.user_id)
    .bind(options.resource_id)
    .bind(loan_date)
    .bind(return_date)
    .bind(LoanStatus::EnCours)
    .fetch_one(&mut *transaction)
    .await
    .context("unable to create loan")?;

    sqlx::query("UPDATE resources SET status = ?1 WHERE id = ?2")
        .bind(ResourceStatus::Emprunte)
        .bind(options.resource_id)
        .execute(&mut *transaction)
        .await
        .context("unable to mark resource as borrowed")?;

    transaction
        .commit()
        .await
        .context("unable to commit transaction")?;

    Ok(CreateLoanOutcome::Created(loan))
}
