use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Database must answer `SELECT 1`
/// - Redis is only checked when a pool is configured
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Option<Arc<Pool>>>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    let redis_status = match redis.get_ref() {
        None => "disabled",
        Some(pool) => redis_ping(pool).await,
    };

    let ready = db_status == "ok" && redis_status != "unhealthy";
    let body = ReadinessResponse {
        status: if ready { "ok" } else { "unhealthy" },
        database: db_status,
        redis: redis_status,
    };

    if ready {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

async fn redis_ping(pool: &Pool) -> &'static str {
    let Ok(mut conn) = pool.get().await else {
        return "unhealthy";
    };
    match deadpool_redis::redis::cmd("PING").query_async::<String>(&mut conn).await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    }
}
