#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourse {
    pub course_id: String,
    pub name: String,
    pub capacity: u32,
}
