use anyhow::{Context, Result};
use models_lending::{
    loan::{Loan, LoanStatus},
    resource::ResourceStatus,
};
use sqlx::SqlitePool;

#[derive(Debug)]
pub enum ReturnLoanOutcome {
    Returned(Loan),
    LoanNotFound,
    NotLoanOwner,
    AlreadyReturned,
}

/// Mark a loan as returned and free up the resource.
///
/// Ownership and state checks happen inside the transaction; both status
/// flips commit together.
pub async fn return_loan(
    db: &SqlitePool,
    loan_id: i64,
    user_id: i64,
) -> Result<ReturnLoanOutcome> {
    let mut transaction = db.begin().await.context("unable to begin transaction")?;

    let loan = sqlx::query_as::<_, Loan>(
        r#"
        SELECT id, user_id, resource_id, loan_date, return_date, status
        FROM loans
        WHERE id = ?1
        "#,
    )
    .bind(loan_id)
    .fetch_optional(&mut *transaction)
    .await
    .context("unable to look up loan")?;

    let Some(loan) = loan else {
        return Ok(ReturnLoanOutcome::LoanNotFound);
    };
    if loan.user_id != user_id {
        return Ok(ReturnLoanOutcome::NotLoanOwner);
    }
    if loan.status != LoanStatus::EnCours {
        return Ok(ReturnLoanOutcome::AlreadyReturned);
    }

    let loan = sqlx::query_as::<_, Loan>(
        r#"
        UPDATE loans
        SET status = ?1
        WHERE id = ?2
        RETURNING id, user_id, resource_id, loan_date, return_date, status
        "#,
    )
    .bind(LoanStatus::Retourne)
    .bind(loan_id)
    .fetch_one(&mut *transaction)
    .await
    .context("unable to update loan")?;

    sqlx::query("UPDATE resources SET status = ?1 WHERE id = ?2")
        .bind(ResourceStatus::Disponible)
        .bind(loan.resource_id)
        .execute(&mut *transaction)
        .await
        .context("unable to free up resource")?;

    transaction
        .commit()
        .await
        .context("unable to commit transaction")?;

    Ok(ReturnLoanOutcome::Returned(loan))
}
