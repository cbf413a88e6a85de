//! PostgreSQL stores. Table names are schema-qualified from config; values are always bound parameters.

use super::{CourseStore, ReviewStore};
use crate::error::{AppError, ConfigError};
use crate::model::{Course, CourseReview, NewCourse, Review};
use async_trait::async_trait;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const COURSES_TABLE: &str = "courses";
const REVIEWS_TABLE: &str = "reviews";

fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), table)
}

/// Create the schema and both tables if they do not exist yet.
/// `reviews.course_id` carries no foreign key: the review handlers own that check.
pub async fn ensure_tables(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;

    let courses_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            url TEXT NOT NULL
        )
        "#,
        qualified_table(schema, COURSES_TABLE)
    );
    sqlx::query(&courses_ddl).execute(pool).await?;

    let reviews_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            course_id INTEGER NOT NULL,
            rating INTEGER NOT NULL,
            comment TEXT NOT NULL
        )
        "#,
        qualified_table(schema, REVIEWS_TABLE)
    );
    sqlx::query(&reviews_ddl).execute(pool).await?;
    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS reviews_course_id_idx ON {} (course_id)",
        qualified_table(schema, REVIEWS_TABLE)
    ))
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|_| ConfigError::InvalidValue {
            key: "DATABASE_URL",
            value: database_url.to_string(),
        })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url.rfind('/').ok_or_else(|| ConfigError::InvalidValue {
        key: "DATABASE_URL",
        value: url.to_string(),
    })? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[derive(Clone)]
pub struct PgCourseStore {
    pool: PgPool,
    table: String,
}

impl PgCourseStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Self {
            pool,
            table: qualified_table(schema, COURSES_TABLE),
        }
    }
}

#[async_trait]
impl CourseStore for PgCourseStore {
    async fn add(&self, course: NewCourse) -> Result<Course, AppError> {
        let sql = format!("INSERT INTO {} (name, url) VALUES ($1, $2) RETURNING id, name, url", self.table);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Course>(&sql)
            .bind(&course.name)
            .bind(&course.url)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        let sql = format!("SELECT id, name, url FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Course>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        let sql = format!("SELECT id, name, url FROM {} ORDER BY id", self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Course>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgReviewStore {
    pool: PgPool,
    table: String,
}

impl PgReviewStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Self {
            pool,
            table: qualified_table(schema, REVIEWS_TABLE),
        }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn add(&self, review: CourseReview) -> Result<Review, AppError> {
        let sql = format!(
            "INSERT INTO {} (course_id, rating, comment) VALUES ($1, $2, $3) RETURNING id, course_id, rating, comment",
            self.table
        );
        tracing::debug!(sql = %sql, course_id = review.course_id, "query");
        let row = sqlx::query_as::<_, Review>(&sql)
            .bind(review.course_id)
            .bind(review.rating)
            .bind(&review.comment)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Review>, AppError> {
        let sql = format!("SELECT id, course_id, rating, comment FROM {} ORDER BY id", self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Review>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_course_id(&self, course_id: i32) -> Result<Vec<Review>, AppError> {
        let sql = format!(
            "SELECT id, course_id, rating, comment FROM {} WHERE course_id = $1 ORDER BY id",
            self.table
        );
        tracing::debug!(sql = %sql, course_id, "query");
        let rows = sqlx::query_as::<_, Review>(&sql)
            .bind(course_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
