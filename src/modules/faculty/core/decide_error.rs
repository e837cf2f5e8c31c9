#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("course already exists")]
    CourseAlreadyExists,

    #[error("course does not exist")]
    CourseNotFound,

    #[error("course capacity must be greater than zero")]
    InvalidCapacity,

    #[error("course already has the name {0}")]
    AlreadyNamed(String),

    #[error("student already enrolled")]
    StudentAlreadyEnrolled,

    #[error("student is not enrolled")]
    StudentNotEnrolled,

    #[error("student already subscribed to the course")]
    AlreadySubscribed,

    #[error("course is full")]
    CourseFull,

    #[error("student cannot subscribe to more than {0} courses")]
    TooManyCourses(usize),
}
