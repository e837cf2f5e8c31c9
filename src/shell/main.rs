use dcb_event_store::modules::faculty::use_cases::change_course_capacity::command::ChangeCourseCapacity;
use dcb_event_store::modules::faculty::use_cases::change_course_capacity::handler::ChangeCourseCapacityHandler;
use dcb_event_store::modules::faculty::use_cases::create_course::command::CreateCourse;
use dcb_event_store::modules::faculty::use_cases::create_course::handler::CreateCourseHandler;
use dcb_event_store::modules::faculty::use_cases::enroll_student::command::EnrollStudent;
use dcb_event_store::modules::faculty::use_cases::enroll_student::handler::EnrollStudentHandler;
use dcb_event_store::modules::faculty::use_cases::subscribe_student::command::SubscribeStudent;
use dcb_event_store::shell::config::Config;
use dcb_event_store::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    fmt().with_env_filter(filter).init();

    let state = AppState::new(&config);
    let bus = &state.command_bus;

    let course_id = Uuid::now_v7().to_string();
    bus.dispatch(
        &CreateCourseHandler,
        CreateCourse {
            course_id: course_id.clone(),
            name: "Event Sourcing 101".into(),
            capacity: 2,
        },
    )
    .await?;

    let mut students = Vec::new();
    for name in ["Ada", "Grace", "Barbara"] {
        let student_id = Uuid::now_v7().to_string();
        bus.dispatch(
            &EnrollStudentHandler,
            EnrollStudent {
                student_id: student_id.clone(),
                name: name.into(),
            },
        )
        .await?;
        students.push(student_id);
    }

    for student_id in &students {
        let subscription = SubscribeStudent {
            student_id: student_id.clone(),
            course_id: course_id.clone(),
        };
        match bus.dispatch(&state.subscribe_student, subscription).await {
            Ok(position) => tracing::info!(%student_id, position, "student subscribed"),
            Err(error) => tracing::warn!(%student_id, %error, "subscription refused"),
        }
    }

    bus.dispatch(
        &ChangeCourseCapacityHandler,
        ChangeCourseCapacity {
            course_id: course_id.clone(),
            capacity: 1,
        },
    )
    .await?;

    tracing::info!(
        %course_id,
        events = state.event_store.len(),
        "faculty scenario finished"
    );
    Ok(())
}
