/// Liveness probe; answers plain-text `ok` without touching the database.
pub async fn health() -> &'static str {
    "ok"
}
