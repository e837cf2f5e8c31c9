use crate::modules::faculty::core::events::FacultyEvent;
use crate::modules::faculty::core::tags::{course_id_tag, of_type, student_id_tag};
use crate::modules::faculty::use_cases::change_course_capacity::command::ChangeCourseCapacity;
use crate::modules::faculty::use_cases::change_course_capacity::handler::ChangeCourseCapacityHandler;
use crate::modules::faculty::use_cases::subscribe_student::command::SubscribeStudent;
use crate::modules::faculty::use_cases::subscribe_student::handler::SubscribeStudentHandler;
use crate::shared::core::primitives::Criteria;
use crate::shared::infrastructure::command_bus::CommandError;
use crate::tests::fixtures::faculty::Fixtures;
use rstest::{fixture, rstest};
use uuid::Uuid;

#[fixture]
fn fixtures() -> Fixtures {
    Fixtures::new()
}

#[rstest]
#[tokio::test]
async fn it_should_allow_subscribing_to_a_previously_full_course(fixtures: Fixtures) {
    let student1 = fixtures.enroll_student().await;
    let student2 = fixtures.enroll_student().await;
    let student3 = fixtures.enroll_student().await;
    let course_id = fixtures.create_course(2).await;
    fixtures.subscribe(&student1, &course_id).await;
    fixtures.subscribe(&student2, &course_id).await;

    let subscribe = || SubscribeStudent {
        student_id: student3.clone(),
        course_id: course_id.clone(),
    };
    let handler = SubscribeStudentHandler::default();
    let refused = fixtures.bus.dispatch(&handler, subscribe()).await;
    assert!(matches!(refused, Err(CommandError::Rejected(_))));

    fixtures
        .bus
        .dispatch(
            &ChangeCourseCapacityHandler,
            ChangeCourseCapacity {
                course_id: course_id.clone(),
                capacity: 1000,
            },
        )
        .await
        .expect("expected the capacity to change");
    fixtures
        .bus
        .dispatch(&handler, subscribe())
        .await
        .expect("expected the subscription to succeed");

    let subscriptions = fixtures
        .events(Criteria::any_of([of_type(
            FacultyEvent::STUDENT_SUBSCRIBED,
            course_id_tag(&course_id),
        )
        .and(student_id_tag(&student3))]))
        .await;
    assert_eq!(subscriptions.len(), 1);
}

#[rstest]
#[tokio::test]
async fn it_should_unsubscribe_students_when_the_capacity_is_reduced(fixtures: Fixtures) {
    let student1 = fixtures.enroll_student().await;
    let student2 = fixtures.enroll_student().await;
    let student3 = fixtures.enroll_student().await;
    let course_id = fixtures.create_course(42).await;
    for student_id in [&student1, &student2, &student3] {
        fixtures.subscribe(student_id, &course_id).await;
    }

    fixtures
        .bus
        .dispatch(
            &ChangeCourseCapacityHandler,
            ChangeCourseCapacity {
                course_id: course_id.clone(),
                capacity: 1,
            },
        )
        .await
        .expect("expected the capacity to change");

    let unsubscribed: Vec<String> = fixtures
        .events(Criteria::any_of([of_type(
            FacultyEvent::STUDENT_UNSUBSCRIBED,
            course_id_tag(&course_id),
        )]))
        .await
        .into_iter()
        .filter_map(|event| match event {
            FacultyEvent::StudentUnsubscribed { student_id, .. } => Some(student_id),
            _ => None,
        })
        .collect();
    assert_eq!(unsubscribed, vec![student2, student3]);
}

#[rstest]
#[tokio::test]
async fn it_should_fail_to_change_the_capacity_of_a_missing_course(fixtures: Fixtures) {
    let result = fixtures
        .bus
        .dispatch(
            &ChangeCourseCapacityHandler,
            ChangeCourseCapacity {
                course_id: Uuid::now_v7().to_string(),
                capacity: 1,
            },
        )
        .await;
    assert!(matches!(result, Err(CommandError::Rejected(_))));
    assert!(fixtures.event_store.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_fail_to_change_the_capacity_to_zero(fixtures: Fixtures) {
    let course_id = fixtures.create_course(42).await;
    let result = fixtures
        .bus
        .dispatch(
            &ChangeCourseCapacityHandler,
            ChangeCourseCapacity {
                course_id,
                capacity: 0,
            },
        )
        .await;
    assert!(matches!(result, Err(CommandError::Rejected(_))));
    assert_eq!(fixtures.event_store.len(), 1);
}
