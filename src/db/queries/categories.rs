use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_category(pool: &SqlitePool, id: i64, kind: &str) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;
    let id = sqlx::query(
        r#"
        INSERT INTO categories (id, type) VALUES (?1, ?2)
        "#,
    )
    .bind(id)
    .bind(kind)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn update_category(pool: &SqlitePool, category: &Category) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        UPDATE categories SET type = ?1 WHERE categories.id = ?2
        "#,
    )
    .bind(&category.kind)
    .bind(category.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_category(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        DELETE FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Makes the categories table match `categories` exactly, keeping ids.
pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<()> {
    let existing_ids: HashSet<i64> = get_all_categories(pool)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    let new_ids: HashSet<i64> = categories.iter().map(|c| c.id).collect();
    for id in existing_ids.difference(&new_ids) {
        delete_category(pool, *id).await?;
    }
    for category in categories {
        if existing_ids.contains(&category.id) {
            update_category(pool, &category).await?;
        } else {
            create_category(pool, category.id, &category.kind).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::fixtures::{empty_pool, seeded_pool};

    #[tokio::test]
    async fn categories_come_back_in_id_order() {
        let pool = empty_pool().await;
        create_category(&pool, 3, "Geography").await.unwrap();
        create_category(&pool, 1, "Science").await.unwrap();

        let ids: Vec<i64> = get_all_categories(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn missing_category_is_none() {
        let pool = seeded_pool().await;
        assert!(get_category(&pool, 42).await.unwrap().is_none());
        assert_eq!(
            get_category(&pool, 2).await.unwrap(),
            Some(Category {
                id: 2,
                kind: "Art".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn import_reconciles_table() {
        let pool = seeded_pool().await;
        import_categories(
            &pool,
            vec![
                Category {
                    id: 2,
                    kind: "Fine Art".to_owned(),
                },
                Category {
                    id: 5,
                    kind: "Sports".to_owned(),
                },
            ],
        )
        .await
        .unwrap();

        let categories = get_all_categories(&pool).await.unwrap();
        assert_eq!(
            categories,
            vec![
                Category {
                    id: 2,
                    kind: "Fine Art".to_owned()
                },
                Category {
                    id: 5,
                    kind: "Sports".to_owned()
                },
            ]
        );
    }

    #[test]
    fn category_serializes_kind_as_type() {
        let category = Category {
            id: 1,
            kind: "Science".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            serde_json::json!({"id": 1, "type": "Science"})
        );
    }
}
