#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeCourseCapacity {
    pub course_id: String,
    pub capacity: u32,
}
