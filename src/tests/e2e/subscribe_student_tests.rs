use crate::modules::faculty::use_cases::subscribe_student::command::SubscribeStudent;
use crate::modules::faculty::use_cases::subscribe_student::handler::SubscribeStudentHandler;
use crate::shared::infrastructure::command_bus::CommandError;
use crate::tests::fixtures::faculty::Fixtures;
use rstest::{fixture, rstest};

#[fixture]
fn fixtures() -> Fixtures {
    Fixtures::new()
}

fn subscription(student_id: &str, course_id: &str) -> SubscribeStudent {
    SubscribeStudent {
        student_id: student_id.into(),
        course_id: course_id.into(),
    }
}

#[rstest]
#[tokio::test]
async fn it_should_subscribe_an_enrolled_student(fixtures: Fixtures) {
    let student_id = fixtures.enroll_student().await;
    let course_id = fixtures.create_course(1).await;
    let position = fixtures
        .bus
        .dispatch(
            &SubscribeStudentHandler::default(),
            subscription(&student_id, &course_id),
        )
        .await;
    assert_eq!(position.unwrap(), 2);
}

#[rstest]
#[tokio::test]
async fn it_should_enforce_the_course_limit_per_student(fixtures: Fixtures) {
    let handler = SubscribeStudentHandler::new(2);
    let student_id = fixtures.enroll_student().await;
    for _ in 0..2 {
        let course_id = fixtures.create_course(5).await;
        fixtures
            .bus
            .dispatch(&handler, subscription(&student_id, &course_id))
            .await
            .unwrap();
    }
    let course_id = fixtures.create_course(5).await;
    let result = fixtures
        .bus
        .dispatch(&handler, subscription(&student_id, &course_id))
        .await;
    assert!(matches!(
        result,
        Err(CommandError::Rejected(reason)) if reason == "student cannot subscribe to more than 2 courses"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_never_overbook_a_course_under_concurrent_subscriptions(fixtures: Fixtures) {
    let course_id = fixtures.create_course(1).await;
    let mut students = Vec::new();
    for _ in 0..8 {
        students.push(fixtures.enroll_student().await);
    }

    let handles: Vec<_> = students
        .iter()
        .map(|student_id| {
            let bus = fixtures.bus.clone();
            let command = subscription(student_id, &course_id);
            tokio::spawn(async move {
                bus.dispatch(&SubscribeStudentHandler::default(), command)
                    .await
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(error) => assert!(
                error.is_conflict() || matches!(error, CommandError::Rejected(_)),
                "unexpected error: {error:?}"
            ),
        }
    }
    assert_eq!(accepted, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_not_conflict_on_unrelated_subscriptions(fixtures: Fixtures) {
    let mut pairs = Vec::new();
    for _ in 0..4 {
        let student_id = fixtures.enroll_student().await;
        let course_id = fixtures.create_course(1).await;
        pairs.push((student_id, course_id));
    }

    let handles: Vec<_> = pairs
        .iter()
        .map(|(student_id, course_id)| {
            let bus = fixtures.bus.clone();
            let command = subscription(student_id, course_id);
            tokio::spawn(async move {
                bus.dispatch(&SubscribeStudentHandler::default(), command)
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle
            .await
            .unwrap()
            .expect("expected unrelated subscriptions to succeed");
    }
    assert_eq!(fixtures.event_store.len(), 12);
}
