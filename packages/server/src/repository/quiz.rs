//! Persistence operations for quizzes.
//!
//! Single-statement operations are generic over the connection so they can run
//! either on the pool or inside a caller's transaction; operations that open
//! their own transaction take the pool.

use quiz_common::{QuizFields, RandomPlay, RoundStep};
use rand::Rng;
use sea_orm::*;
use tracing::warn;

use super::RepoError;
use crate::entity::{quiz, tip};

/// How often a random draw is repeated when the drawn row vanished under a
/// concurrent delete.
const MAX_DRAW_ATTEMPTS: usize = 3;

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<quiz::Model>, DbErr> {
    quiz::Entity::find_by_id(id).one(db).await
}

/// Look up a quiz by ID, returning `NotFound` if it does not exist.
pub async fn find_quiz<C: ConnectionTrait>(db: &C, id: i32) -> Result<quiz::Model, RepoError> {
    find_by_id(db, id).await?.ok_or(RepoError::NotFound(id))
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<quiz::Model>, DbErr> {
    quiz::Entity::find()
        .order_by_asc(quiz::Column::Id)
        .all(db)
        .await
}

fn excluding(excluded: &[i32]) -> Select<quiz::Entity> {
    quiz::Entity::find().filter(quiz::Column::Id.is_not_in(excluded.iter().copied()))
}

/// Number of quizzes whose id is not in `excluded`.
pub async fn count_excluding<C: ConnectionTrait>(db: &C, excluded: &[i32]) -> Result<u64, DbErr> {
    excluding(excluded).count(db).await
}

/// Draw one quiz uniformly from those not in `excluded`.
///
/// `count` must come from [`count_excluding`] on the same connection or
/// transaction. Rows are ordered by id so the random index refers to a stable
/// position. Returns `None` when `count` is zero or the row at the drawn
/// index no longer exists.
pub async fn sample_one_excluding<C: ConnectionTrait>(
    db: &C,
    excluded: &[i32],
    count: u64,
) -> Result<Option<quiz::Model>, DbErr> {
    if count == 0 {
        return Ok(None);
    }
    let offset = rand::rng().random_range(0..count);

    excluding(excluded)
        .order_by_asc(quiz::Column::Id)
        .offset(offset)
        .limit(1)
        .one(db)
        .await
}

/// Advance a random-play round: either end it or draw the next quiz.
///
/// Counting and drawing share one transaction.
pub async fn next_random_step(
    db: &DatabaseConnection,
    round: &mut RandomPlay,
) -> Result<RoundStep<quiz::Model>, RepoError> {
    for attempt in 1..=MAX_DRAW_ATTEMPTS {
        let txn = db.begin().await?;
        let remaining = count_excluding(&txn, round.answered()).await?;
        let drawn = sample_one_excluding(&txn, round.answered(), remaining).await?;
        txn.commit().await?;

        if let Some(step) = round.next_step(remaining, drawn) {
            return Ok(step);
        }
        warn!(attempt, remaining, "Drawn quiz disappeared, drawing again");
    }

    Err(RepoError::Storage(DbErr::Custom(
        "quiz set kept changing while drawing a random quiz".into(),
    )))
}

/// Insert a quiz with exactly the two editable fields set.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    fields: &QuizFields,
) -> Result<quiz::Model, RepoError> {
    fields.validate()?;

    let now = chrono::Utc::now();
    let new_quiz = quiz::ActiveModel {
        question: Set(fields.question.clone()),
        answer: Set(fields.answer.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(new_quiz.insert(db).await?)
}

/// Overwrite the question and answer of an existing quiz.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    quiz: quiz::Model,
    fields: &QuizFields,
) -> Result<quiz::Model, RepoError> {
    fields.validate()?;

    let mut active: quiz::ActiveModel = quiz.into();
    active.question = Set(fields.question.clone());
    active.answer = Set(fields.answer.clone());
    active.updated_at = Set(chrono::Utc::now());

    Ok(active.update(db).await?)
}

/// Permanently delete a quiz together with its tips.
pub async fn delete(db: &DatabaseConnection, quiz: quiz::Model) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    tip::Entity::delete_many()
        .filter(tip::Column::QuizId.eq(quiz.id))
        .exec(&txn)
        .await?;
    quiz::Entity::delete_by_id(quiz.id).exec(&txn).await?;

    txn.commit().await
}
