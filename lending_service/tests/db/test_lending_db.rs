use lending_db_client::{
    loans::{
        create_loan::{CreateLoanOptions, CreateLoanOutcome, create_loan},
        get_loans::get_loans_for_user,
        return_loan::{ReturnLoanOutcome, return_loan},
    },
    resources::{
        create_resource::{CreateResourceOptions, create_resource},
        get_resource::get_resource,
        list_resources::list_resources,
        set_status::set_resource_status,
    },
    seed::fill_catalog,
    users::{
        create_user::{CreateUserOptions, create_user},
        get_user::get_user,
        get_user_by_email::get_user_by_email,
        update_profile::{UpdateProfileOptions, update_profile},
    },
};
use models_lending::{
    loan::{BorrowType, LoanStatus},
    resource::{ResourceKind, ResourceStatus},
    user::User,
};
use sqlx::SqlitePool;

async fn seed_user(pool: &SqlitePool, email: &str) -> User {
    create_user(
        pool,
        CreateUserOptions {
            name: "Test Member".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        },
    )
    .await
    .expect("create test user")
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_create_and_look_up_user(pool: SqlitePool) -> sqlx::Result<()> {
    let user = seed_user(&pool, "claire@mediatheque.example").await;
    assert!(user.id > 0);

    let by_id = get_user(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "claire@mediatheque.example");

    let by_email = get_user_by_email(&pool, "claire@mediatheque.example")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);

    assert!(get_user(&pool, user.id + 1).await.unwrap().is_none());
    assert!(
        get_user_by_email(&pool, "nobody@mediatheque.example")
            .await
            .unwrap()
            .is_none()
    );
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_duplicate_email_is_rejected_by_schema(pool: SqlitePool) -> sqlx::Result<()> {
    seed_user(&pool, "claire@mediatheque.example").await;

    let result = create_user(
        &pool,
        CreateUserOptions {
            name: "Impostor".to_string(),
            email: "claire@mediatheque.example".to_string(),
            password_hash: "hash".to_string(),
        },
    )
    .await;

    assert!(result.is_err());
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_update_profile(pool: SqlitePool) -> sqlx::Result<()> {
    let user = seed_user(&pool, "claire@mediatheque.example").await;

    let updated = update_profile(
        &pool,
        user.id,
        UpdateProfileOptions {
            name: "Claire Deneuve".to_string(),
            email: "claire.deneuve@mediatheque.example".to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Claire Deneuve");
    // The hash is untouched by a profile update
    assert_eq!(updated.password_hash, "hash");

    let missing = update_profile(
        &pool,
        user.id + 1,
        UpdateProfileOptions {
            name: "Nobody".to_string(),
            email: "nobody@mediatheque.example".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(missing.is_none());
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_resource_crud_and_status(pool: SqlitePool) -> sqlx::Result<()> {
    let resource = create_resource(
        &pool,
        CreateResourceOptions {
            title: "Wingspan".to_string(),
            kind: ResourceKind::Jeu,
            status: ResourceStatus::Disponible,
        },
    )
    .await
    .unwrap();

    let fetched = get_resource(&pool, resource.id).await.unwrap().unwrap();
    assert_eq!(fetched, resource);

    let disabled = set_resource_status(&pool, resource.id, ResourceStatus::Indisponible)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(disabled.status, ResourceStatus::Indisponible);

    let all = list_resources(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, ResourceStatus::Indisponible);

    assert!(
        set_resource_status(&pool, resource.id + 1, ResourceStatus::Disponible)
            .await
            .unwrap()
            .is_none()
    );
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_loan_lifecycle(pool: SqlitePool) -> sqlx::Result<()> {
    let claire = seed_user(&pool, "claire@mediatheque.example").await;
    let marc = seed_user(&pool, "marc@mediatheque.example").await;
    let resource = create_resource(
        &pool,
        CreateResourceOptions {
            title: "Dune".to_string(),
            kind: ResourceKind::Livre,
            status: ResourceStatus::Disponible,
        },
    )
    .await
    .unwrap();

    // Borrow flips the resource to emprunté
    let outcome = create_loan(
        &pool,
        CreateLoanOptions {
            user_id: claire.id,
            resource_id: resource.id,
            borrow_type: BorrowType::AEmporter,
        },
    )
    .await
    .unwrap();
    let loan = match outcome {
        CreateLoanOutcome::Created(loan) => loan,
        other => panic!("expected created loan, got {other:?}"),
    };
    assert_eq!(loan.status, LoanStatus::EnCours);
    assert_eq!(
        get_resource(&pool, resource.id).await.unwrap().unwrap().status,
        ResourceStatus::Emprunte
    );

    // A second borrow of the same copy loses
    let outcome = create_loan(
        &pool,
        CreateLoanOptions {
            user_id: marc.id,
            resource_id: resource.id,
            borrow_type: BorrowType::SurPlace,
        },
    )
    .await
    .unwrap();
    assert!(matches!(outcome, CreateLoanOutcome::ResourceUnavailable));

    // Only the borrower can return it
    let outcome = return_loan(&pool, loan.id, marc.id).await.unwrap();
    assert!(matches!(outcome, ReturnLoanOutcome::NotLoanOwner));

    let outcome = return_loan(&pool, loan.id, claire.id).await.unwrap();
    let returned = match outcome {
        ReturnLoanOutcome::Returned(loan) => loan,
        other => panic!("expected returned loan, got {other:?}"),
    };
    assert_eq!(returned.status, LoanStatus::Retourne);
    assert_eq!(
        get_resource(&pool, resource.id).await.unwrap().unwrap().status,
        ResourceStatus::Disponible
    );

    // Returning twice is a conflict
    let outcome = return_loan(&pool, loan.id, claire.id).await.unwrap();
    assert!(matches!(outcome, ReturnLoanOutcome::AlreadyReturned));

    // The loan history remains
    let loans = get_loans_for_user(&pool, claire.id).await.unwrap();
    assert_eq!(loans.len(), 1);
    assert!(get_loans_for_user(&pool, marc.id).await.unwrap().is_empty());
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_create_loan_for_unknown_resource(pool: SqlitePool) -> sqlx::Result<()> {
    let claire = seed_user(&pool, "claire@mediatheque.example").await;

    let outcome = create_loan(
        &pool,
        CreateLoanOptions {
            user_id: claire.id,
            resource_id: 999,
            borrow_type: BorrowType::AEmporter,
        },
    )
    .await
    .unwrap();
    assert!(matches!(outcome, CreateLoanOutcome::ResourceNotFound));
    Ok(())
}

#[sqlx::test(migrations = "../lending_db_client/migrations")]
async fn test_fill_catalog_skips_existing_titles(pool: SqlitePool) -> sqlx::Result<()> {
    // A title from the demo set that already exists is not duplicated
    create_resource(
        &pool,
        CreateResourceOptions {
            title: "Dune".to_string(),
            kind: ResourceKind::Livre,
            status: ResourceStatus::Disponible,
        },
    )
    .await
    .unwrap();

    let added = fill_catalog(&pool).await.unwrap();
    assert_eq!(added, 59);

    let added_again = fill_catalog(&pool).await.unwrap();
    assert_eq!(added_again, 0);

    let all = list_resources(&pool).await.unwrap();
    assert_eq!(all.len(), 60);
    Ok(())
}
