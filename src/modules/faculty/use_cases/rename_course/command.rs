#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCourse {
    pub course_id: String,
    pub name: String,
}
