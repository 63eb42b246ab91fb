use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    quiz::pick_unseen,
    server::app::AppState,
    telemetry::QUIZ_CNTR,
};

use super::ApiResponse;

/// Category id that stands for every question.
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizRequest {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    Json(request): Json<QuizRequest>,
) -> ApiResponse<Json<QuizResponse>> {
    let category = request.quiz_category.id;
    let candidates = if category == ALL_CATEGORIES {
        questions::get_all_questions(&pool).await?
    } else {
        questions::get_questions_for_category(&pool, category).await?
    };
    let seen: HashSet<i64> = request.previous_questions.into_iter().collect();
    let ids: Vec<i64> = candidates.iter().map(|q| q.id).collect();
    let picked = pick_unseen(&ids, &seen, &mut rand::thread_rng());

    let question = picked.and_then(|id| candidates.into_iter().find(|q| q.id == id));
    match question {
        Some(question) => {
            let label = if category == ALL_CATEGORIES {
                "all".to_owned()
            } else {
                category.to_string()
            };
            QUIZ_CNTR.with_label_values(&[label.as_str()]).inc();
            Ok(Json(QuizResponse {
                success: true,
                question: Some(question),
            }))
        }
        None => {
            tracing::info!("No questions left in category {category}");
            Ok(Json(QuizResponse {
                success: false,
                question: None,
            }))
        }
    }
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
