use anyhow::{Context, Result};
use models_lending::loan::Loan;
use sqlx::SqlitePool;

pub async fn get_loans_for_user(db: &SqlitePool, user_id: i64) -> Result<Vec<Loan>> {
    let loans = sqlx::query_as::<_, Loan>(
        r#"
        SELECT id, user_id, resource_id, loan_date, return_date, status
        FROM loans
        WHERE user_id = ?1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("unable to list loans")?;

    Ok(loans)
}
