use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, categories::get_category, questions},
        Question,
    },
    server::app::AppState,
};

use super::{ApiError, ApiResponse};

#[derive(Serialize)]
struct CategoryIds {
    success: bool,
    categories: Vec<i64>,
}

#[derive(Serialize)]
struct CategoryQuestions {
    questions: Vec<Question>,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoryIds>> {
    let categories = get_all_categories(&pool).await?;
    Ok(Json(CategoryIds {
        success: true,
        categories: categories.into_iter().map(|c| c.id).collect(),
    }))
}

#[tracing::instrument(skip(pool))]
async fn questions_for_category(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Json<CategoryQuestions>> {
    // a non-numeric id can't name a category
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let category = get_category(&pool, id).await?.ok_or(ApiError::NotFound)?;
    let questions = questions::get_questions_for_category(&pool, category.id).await?;
    Ok(Json(CategoryQuestions { questions }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
