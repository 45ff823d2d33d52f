use sea_orm::*;
use tracing::info;

use crate::entity::quiz;

/// Quizzes inserted on first run.
const DEFAULT_QUIZZES: &[(&str, &str)] = &[
    ("Capital de Italia", "Roma"),
    ("Capital de Francia", "París"),
    ("Capital de España", "Madrid"),
    ("Capital de Portugal", "Lisboa"),
];

/// Seed the `quiz` table when it is empty. Returns the number of rows inserted.
pub async fn seed_quizzes(db: &DatabaseConnection) -> Result<u64, DbErr> {
    let existing = quiz::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(0);
    }

    let now = chrono::Utc::now();
    let txn = db.begin().await?;
    for &(question, answer) in DEFAULT_QUIZZES {
        quiz::ActiveModel {
            question: Set(question.to_string()),
            answer: Set(answer.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }
    txn.commit().await?;

    let inserted = DEFAULT_QUIZZES.len() as u64;
    info!("Seeded {} quizzes", inserted);
    Ok(inserted)
}
