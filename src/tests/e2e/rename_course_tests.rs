use crate::modules::faculty::core::events::FacultyEvent;
use crate::modules::faculty::core::tags::{course_id_tag, of_type};
use crate::modules::faculty::use_cases::rename_course::command::RenameCourse;
use crate::modules::faculty::use_cases::rename_course::handler::RenameCourseHandler;
use crate::shared::core::primitives::Criteria;
use crate::shared::infrastructure::command_bus::CommandError;
use crate::tests::fixtures::faculty::Fixtures;
use rstest::{fixture, rstest};

#[fixture]
fn fixtures() -> Fixtures {
    Fixtures::new()
}

fn rename(course_id: &str, name: &str) -> RenameCourse {
    RenameCourse {
        course_id: course_id.into(),
        name: name.into(),
    }
}

#[rstest]
#[tokio::test]
async fn it_should_rename_a_course_twice(fixtures: Fixtures) {
    let course_id = fixtures.create_course(10).await;
    fixtures
        .bus
        .dispatch(&RenameCourseHandler, rename(&course_id, "Algebra"))
        .await
        .expect("expected the first rename to succeed");
    fixtures
        .bus
        .dispatch(&RenameCourseHandler, rename(&course_id, "Linear Algebra"))
        .await
        .expect("expected the second rename to succeed");

    let renames = fixtures
        .events(Criteria::any_of([of_type(
            FacultyEvent::COURSE_RENAMED,
            course_id_tag(&course_id),
        )]))
        .await;
    assert_eq!(
        renames,
        vec![
            FacultyEvent::CourseRenamed {
                course_id: course_id.clone(),
                name: "Algebra".into(),
            },
            FacultyEvent::CourseRenamed {
                course_id,
                name: "Linear Algebra".into(),
            },
        ]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_reject_renaming_to_the_current_name(fixtures: Fixtures) {
    let course_id = fixtures.create_course(10).await;
    fixtures
        .bus
        .dispatch(&RenameCourseHandler, rename(&course_id, "Algebra"))
        .await
        .unwrap();
    let result = fixtures
        .bus
        .dispatch(&RenameCourseHandler, rename(&course_id, "Algebra"))
        .await;
    assert!(matches!(
        result,
        Err(CommandError::Rejected(reason)) if reason == "course already has the name Algebra"
    ));
}

#[rstest]
#[tokio::test]
async fn it_should_not_see_renames_of_other_courses(fixtures: Fixtures) {
    let course1 = fixtures.create_course(10).await;
    let course2 = fixtures.create_course(10).await;
    fixtures
        .bus
        .dispatch(&RenameCourseHandler, rename(&course1, "Algebra"))
        .await
        .unwrap();
    let position = fixtures
        .bus
        .dispatch(&RenameCourseHandler, rename(&course2, "Algebra"))
        .await;
    assert_eq!(position.unwrap(), 3);
}
