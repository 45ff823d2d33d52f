use crate::common::{TestApp, routes};

mod listing {
    use super::*;

    #[tokio::test]
    async fn home_redirects_to_the_quiz_list() {
        let app = TestApp::spawn().await;
        let res = app.browser().get(routes::HOME).await;

        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/quizzes"));
    }

    #[tokio::test]
    async fn fresh_database_lists_no_quizzes() {
        let app = TestApp::spawn().await;
        let res = app.browser().get(routes::QUIZZES).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.view(), "quizzes/index");
        assert_eq!(res.body["quizzes"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn seeded_database_lists_the_default_quizzes() {
        let app = TestApp::spawn_seeded().await;
        let res = app.browser().get(routes::QUIZZES).await;

        assert_eq!(res.status, 200);
        let quizzes = res.body["quizzes"].as_array().unwrap();
        assert_eq!(quizzes.len(), 4);
        assert_eq!(quizzes[0]["question"], "Capital de Italia");
        assert_eq!(quizzes[0]["answer"], "Roma");
    }

    #[tokio::test]
    async fn seeding_twice_inserts_nothing_more() {
        let app = TestApp::spawn_seeded().await;
        let inserted = quiz_server::seed::seed_quizzes(&app.db).await.unwrap();

        assert_eq!(inserted, 0);
        let res = app.browser().get(routes::QUIZZES).await;
        assert_eq!(res.body["quizzes"].as_array().unwrap().len(), 4);
    }
}

mod creation {
    use super::*;

    #[tokio::test]
    async fn new_form_is_blank() {
        let app = TestApp::spawn().await;
        let res = app.browser().get(routes::NEW_QUIZ).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.view(), "quizzes/new");
        assert_eq!(res.body["quiz"]["question"], "");
        assert_eq!(res.body["quiz"]["answer"], "");
        assert!(res.body["quiz"]["id"].is_null());
    }

    #[tokio::test]
    async fn created_quiz_is_shown_with_the_submitted_fields() {
        let app = TestApp::spawn().await;
        let browser = app.browser();

        let res = browser
            .post_form(routes::QUIZZES, "Capital de Grecia", "Atenas")
            .await;
        assert_eq!(res.status, 303);
        let id = res.redirect_id();

        let show = browser.get(&routes::quiz(id)).await;
        assert_eq!(show.status, 200);
        assert_eq!(show.view(), "quizzes/show");
        assert_eq!(show.body["quiz"]["id"], id);
        assert_eq!(show.body["quiz"]["question"], "Capital de Grecia");
        assert_eq!(show.body["quiz"]["answer"], "Atenas");
    }

    #[tokio::test]
    async fn success_message_is_shown_exactly_once() {
        let app = TestApp::spawn().await;
        let browser = app.browser();
        let id = browser.create_quiz("¿2+2?", "4").await;

        let first = browser.get(&routes::quiz(id)).await;
        assert_eq!(first.flash("success"), ["Quiz created successfully."]);

        let second = browser.get(&routes::quiz(id)).await;
        assert!(second.flash("success").is_empty());
    }

    #[tokio::test]
    async fn flash_messages_belong_to_the_session_that_set_them() {
        let app = TestApp::spawn().await;
        let author = app.browser();
        let id = author.create_quiz("Q", "A").await;

        let other = app.browser().get(&routes::quiz(id)).await;
        assert!(other.flash("success").is_empty());

        let own = author.get(&routes::quiz(id)).await;
        assert_eq!(own.flash("success"), ["Quiz created successfully."]);
    }

    #[tokio::test]
    async fn invalid_form_is_shown_again_with_itemized_errors() {
        let app = TestApp::spawn().await;
        let browser = app.browser();

        let res = browser
            .post_form(routes::QUIZZES, "Capital de Suecia", "   ")
            .await;

        assert_eq!(res.status, 422);
        assert_eq!(res.view(), "quizzes/new");
        assert_eq!(res.body["quiz"]["question"], "Capital de Suecia");
        assert_eq!(res.body["quiz"]["answer"], "   ");
        assert_eq!(
            res.flash("error"),
            ["There are errors in the form:", "Answer must not be empty."]
        );

        let list = browser.get(routes::QUIZZES).await;
        assert_eq!(list.body["quizzes"].as_array().unwrap().len(), 0);
        // Already shown on the re-rendered form.
        assert!(list.flash("error").is_empty());
    }

    #[tokio::test]
    async fn every_failing_field_is_reported() {
        let app = TestApp::spawn().await;
        let res = app.browser().post_form(routes::QUIZZES, "", "").await;

        assert_eq!(res.status, 422);
        assert_eq!(
            res.flash("error"),
            [
                "There are errors in the form:",
                "Question must not be empty.",
                "Answer must not be empty.",
            ]
        );
    }

    #[tokio::test]
    async fn undecodable_body_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let res = app.browser().post_raw(routes::QUIZZES, "not a form").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["errors"][0]["field"], "body");
    }
}

mod lookup {
    use super::*;

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app.browser().get(&routes::quiz(999)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "There is no quiz with id=999");
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app.browser().get("/quizzes/abc/edit").await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn every_quiz_route_resolves_the_id_first() {
        let app = TestApp::spawn().await;
        let browser = app.browser();

        for path in [
            routes::edit(42),
            routes::play(42),
            routes::check(42),
            routes::random_check(42),
        ] {
            let res = browser.get(&path).await;
            assert_eq!(res.status, 404, "{path} should be NOT_FOUND");
        }
        assert_eq!(browser.delete(&routes::quiz(42)).await.status, 404);
        assert_eq!(browser.put_form(&routes::quiz(42), "q", "a").await.status, 404);
    }
}

mod editing {
    use super::*;

    #[tokio::test]
    async fn edit_form_shows_the_current_fields() {
        let app = TestApp::spawn().await;
        let browser = app.browser();
        let id = browser.create_quiz("Capital de Chile", "Santiago").await;

        let res = browser.get(&routes::edit(id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.view(), "quizzes/edit");
        assert_eq!(res.body["quiz"]["id"], id);
        assert_eq!(res.body["quiz"]["answer"], "Santiago");
    }

    #[tokio::test]
    async fn update_replaces_both_fields_and_keeps_the_id() {
        let app = TestApp::spawn().await;
        let browser = app.browser();
        let id = browser.create_quiz("Capital de Peru", "Cuzco").await;

        let res = browser
            .put_form(&routes::quiz(id), "Capital de Perú", "Lima")
            .await;
        assert_eq!(res.status, 303);
        assert_eq!(res.redirect_id(), id);

        let show = browser.get(&routes::quiz(id)).await;
        assert_eq!(show.body["quiz"]["id"], id);
        assert_eq!(show.body["quiz"]["question"], "Capital de Perú");
        assert_eq!(show.body["quiz"]["answer"], "Lima");
        assert!(
            show.flash("success")
                .contains(&"Quiz edited successfully.".to_string())
        );
    }

    #[tokio::test]
    async fn invalid_update_keeps_the_stored_quiz() {
        let app = TestApp::spawn().await;
        let browser = app.browser();
        let id = browser.create_quiz("Capital de Japón", "Tokio").await;

        let res = browser.put_form(&routes::quiz(id), "", "Kioto").await;
        assert_eq!(res.status, 422);
        assert_eq!(res.view(), "quizzes/edit");
        assert_eq!(res.body["quiz"]["id"], id);
        assert_eq!(res.body["quiz"]["answer"], "Kioto");
        assert!(
            res.flash("error")
                .contains(&"Question must not be empty.".to_string())
        );

        let show = browser.get(&routes::quiz(id)).await;
        assert_eq!(show.body["quiz"]["question"], "Capital de Japón");
        assert_eq!(show.body["quiz"]["answer"], "Tokio");
    }
}

mod deletion {
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

    use super::*;
    use quiz_server::entity::tip;

    #[tokio::test]
    async fn deleted_quiz_is_gone() {
        let app = TestApp::spawn().await;
        let browser = app.browser();
        let id = browser.create_quiz("Capital de Cuba", "La Habana").await;

        let res = browser.delete(&routes::quiz(id)).await;
        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/quizzes"));

        let show = browser.get(&routes::quiz(id)).await;
        assert_eq!(show.status, 404);

        let list = browser.get(routes::QUIZZES).await;
        assert_eq!(list.body["quizzes"].as_array().unwrap().len(), 0);
        assert!(
            list.flash("success")
                .contains(&"Quiz deleted successfully.".to_string())
        );
    }

    #[tokio::test]
    async fn deleting_a_quiz_removes_its_tips() {
        let app = TestApp::spawn().await;
        let browser = app.browser();
        let id = browser.create_quiz("Capital de Irlanda", "Dublín").await;

        let now = chrono::Utc::now();
        tip::ActiveModel {
            text: Set("Empieza por D".into()),
            quiz_id: Set(id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&app.db)
        .await
        .expect("insert tip");

        let res = browser.delete(&routes::quiz(id)).await;
        assert_eq!(res.status, 303);

        let tips = tip::Entity::find().count(&app.db).await.unwrap();
        assert_eq!(tips, 0);
    }
}

mod playing {
    use super::*;

    #[tokio::test]
    async fn play_hides_the_answer_and_prefills_the_input() {
        let app = TestApp::spawn_seeded().await;
        let browser = app.browser();

        let res = browser.get_with_answer(&routes::play(1), "Ro").await;
        assert_eq!(res.status, 200);
        assert_eq!(res.view(), "quizzes/play");
        assert_eq!(res.body["quiz"]["question"], "Capital de Italia");
        assert!(res.body["quiz"]["answer"].is_null());
        assert_eq!(res.body["answer"], "Ro");
    }

    #[tokio::test]
    async fn play_defaults_to_an_empty_answer() {
        let app = TestApp::spawn_seeded().await;
        let res = app.browser().get(&routes::play(1)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["answer"], "");
    }

    #[tokio::test]
    async fn check_ignores_case_and_surrounding_whitespace() {
        let app = TestApp::spawn_seeded().await;
        let res = app
            .browser()
            .get_with_answer(&routes::check(1), "  rOMA ")
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.view(), "quizzes/result");
        assert_eq!(res.body["result"], true);
        assert_eq!(res.body["answer"], "  rOMA ");
        assert_eq!(res.body["quiz"]["answer"], "Roma");
    }

    #[tokio::test]
    async fn check_is_accent_sensitive() {
        let app = TestApp::spawn_seeded().await;
        let browser = app.browser();

        let wrong = browser.get_with_answer(&routes::check(2), "paris").await;
        assert_eq!(wrong.body["result"], false);

        let right = browser.get_with_answer(&routes::check(2), "parís").await;
        assert_eq!(right.body["result"], true);
    }

    #[tokio::test]
    async fn check_without_answer_is_wrong() {
        let app = TestApp::spawn_seeded().await;
        let res = app.browser().get(&routes::check(3)).await;

        assert_eq!(res.body["result"], false);
        assert_eq!(res.body["answer"], "");
    }
}

mod field_limits {
    use super::*;

    #[tokio::test]
    async fn surrounding_whitespace_counts_toward_the_limit() {
        let app = TestApp::spawn().await;
        let browser = app.browser();
        let padded = format!("a{}", " ".repeat(5000));

        let res = browser.post_form(routes::QUIZZES, &padded, "Roma").await;
        assert_eq!(res.status, 422);
        assert!(
            res.flash("error")
                .contains(&"Question must be at most 1000 characters.".to_string())
        );

        let list = browser.get(routes::QUIZZES).await;
        assert_eq!(list.body["quizzes"].as_array().unwrap().len(), 0);
    }
}

mod storage_failures {
    use sea_orm::ConnectionTrait;

    use super::*;

    /// Make every `statement` (INSERT, UPDATE or DELETE) on `quiz` fail.
    async fn reject_quiz_writes(app: &TestApp, statement: &str) {
        let sql = format!(
            "CREATE TRIGGER reject_quiz_{} BEFORE {statement} ON quiz \
             BEGIN SELECT RAISE(ABORT, 'quiz storage offline'); END",
            statement.to_lowercase()
        );
        app.db
            .execute_unprepared(&sql)
            .await
            .expect("Failed to install trigger");
    }

    fn assert_failed_with(res: &crate::common::TestResponse, message: &str) {
        assert_eq!(res.status, 500, "{}", res.text);
        assert_eq!(res.body["code"], "INTERNAL_ERROR");
        assert_eq!(res.flash("error"), [message]);
        assert!(!res.text.contains("quiz storage offline"));
    }

    #[tokio::test]
    async fn failed_create_shows_a_generic_message() {
        let app = TestApp::spawn().await;
        reject_quiz_writes(&app, "INSERT").await;
        let browser = app.browser();

        let res = browser
            .post_form(routes::QUIZZES, "Capital de Chile", "Santiago")
            .await;
        assert_failed_with(&res, "Error creating a new Quiz.");
    }

    #[tokio::test]
    async fn failed_update_shows_a_generic_message_and_keeps_the_quiz() {
        let app = TestApp::spawn().await;
        let browser = app.browser();
        let id = browser.create_quiz("Capital de Perú", "Lima").await;
        reject_quiz_writes(&app, "UPDATE").await;

        let res = browser
            .put_form(&routes::quiz(id), "Capital de Bolivia", "Sucre")
            .await;
        assert_failed_with(&res, "Error editing the Quiz.");

        let show = browser.get(&routes::quiz(id)).await;
        assert_eq!(show.body["quiz"]["answer"], "Lima");
    }

    #[tokio::test]
    async fn failed_delete_shows_a_generic_message_once() {
        let app = TestApp::spawn_seeded().await;
        reject_quiz_writes(&app, "DELETE").await;
        let browser = app.browser();

        let res = browser.delete(&routes::quiz(1)).await;
        assert_failed_with(&res, "Error deleting the Quiz.");

        let show = browser.get(&routes::quiz(1)).await;
        assert_eq!(show.status, 200);
        assert!(show.flash("error").is_empty());
    }
}
