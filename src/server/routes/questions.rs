use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions},
        Category, NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::{deserialize_page, first_page},
        pagination::paginate,
    },
    telemetry::QUESTIONS_DELETED_CNTR,
};

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    page: i64,
}

// clients send the numeric fields either as numbers or as strings
#[derive(Deserialize)]
struct QuestionBody {
    question: String,
    answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
}

impl From<QuestionBody> for NewQuestion {
    fn from(body: QuestionBody) -> Self {
        NewQuestion {
            question: body.question,
            answer: body.answer,
            category: body.category,
            difficulty: body.difficulty,
        }
    }
}

#[derive(Serialize)]
struct QuestionsPage {
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<Category>,
    current_category: i64,
}

#[derive(Serialize)]
struct Deleted {
    deleted: i64,
}

#[derive(Serialize)]
struct Created {
    success: bool,
}

#[derive(Serialize)]
struct SearchResults {
    questions: Vec<Question>,
}

/// Pages through the questions of the first category. `total_questions` only counts that
/// category.
async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let categories = get_all_categories(&pool).await?;
    let current_category = categories.first().ok_or(ApiError::NotFound)?.id;
    let questions = questions::get_questions_for_category(&pool, current_category).await?;
    let total_questions = questions.len();
    let page_questions = paginate(questions, page);
    if page_questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(QuestionsPage {
        questions: page_questions,
        total_questions,
        categories,
        current_category,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuestionBody>,
) -> ApiResponse<Json<Created>> {
    let id = questions::create_question(&pool, &body.into()).await?;
    tracing::info!("Created question {id}");
    Ok(Json(Created { success: true }))
}

#[tracing::instrument(skip(pool))]
async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<Deleted>> {
    if questions::get_question_by_id(&pool, id).await?.is_none() {
        return Err(ApiError::Unprocessable);
    }
    questions::delete_question(&pool, id).await?;
    QUESTIONS_DELETED_CNTR.inc();
    Ok(Json(Deleted { deleted: id }))
}

#[tracing::instrument(skip(pool))]
async fn search_questions(
    State(pool): State<SqlitePool>,
    Path(search_term): Path<String>,
) -> ApiResponse<Json<SearchResults>> {
    let questions = questions::search_questions(&pool, &search_term).await?;
    Ok(Json(SearchResults { questions }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route(
            "/questions/{id}",
            delete(delete_question).post(search_questions),
        )
        .with_state(state)
}
