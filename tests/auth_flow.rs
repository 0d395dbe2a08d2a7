use art_market_api::{
    db::{DbPool, create_pool},
    dto::auth::{LoginRequest, RegisterRequest},
    error::AppError,
    services::{auth_service, token},
};
use uuid::Uuid;

const SECRET: &str = "integration_test_secret";

// Register -> duplicate register -> login -> token decode -> userinfo.
#[tokio::test]
async fn register_login_userinfo_flow() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await? else {
        return Ok(());
    };

    auth_service::register_user(
        &pool,
        RegisterRequest {
            email: "alice@example.com".into(),
            uname: "alice".into(),
            password: "correct horse".into(),
        },
    )
    .await?;

    // Second registration with the same email must be rejected and leave a
    // single row behind.
    let dup = auth_service::register_user(
        &pool,
        RegisterRequest {
            email: "alice@example.com".into(),
            uname: "alice2".into(),
            password: "other".into(),
        },
    )
    .await;
    assert!(matches!(dup, Err(AppError::BadRequest(_))));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("alice@example.com")
        .fetch_one(&pool)
        .await?;
    assert_eq!(count.0, 1);

    let resp = auth_service::login_user(
        &pool,
        SECRET,
        LoginRequest {
            email: "alice@example.com".into(),
            password: "correct horse".into(),
        },
    )
    .await?;
    let user_id = token::decode_token(&resp.token, SECRET)?;

    // Wrong password and unknown email must be indistinguishable.
    let wrong = auth_service::login_user(
        &pool,
        SECRET,
        LoginRequest {
            email: "alice@example.com".into(),
            password: "nope".into(),
        },
    )
    .await;
    let unknown = auth_service::login_user(
        &pool,
        SECRET,
        LoginRequest {
            email: "nobody@example.com".into(),
            password: "nope".into(),
        },
    )
    .await;
    match (wrong, unknown) {
        (Err(AppError::BadRequest(a)), Err(AppError::BadRequest(b))) => assert_eq!(a, b),
        other => panic!("expected matching bad request errors, got {other:?}"),
    }

    let info = auth_service::user_info(&pool, user_id).await?;
    assert_eq!(info.id, user_id);
    assert_eq!(info.email, "alice@example.com");
    assert_eq!(info.uname, "alice");

    assert!(matches!(
        auth_service::user_info(&pool, Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

async fn setup_pool() -> anyhow::Result<Option<DbPool>> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration tests."
                );
                return Ok(None);
            }
        };

    let pool = create_pool(&database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    sqlx::query("TRUNCATE TABLE cart_items, artworks, users RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await?;
    Ok(Some(pool))
}
