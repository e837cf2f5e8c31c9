#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeStudent {
    pub student_id: String,
    pub course_id: String,
}
