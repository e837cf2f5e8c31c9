#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollStudent {
    pub student_id: String,
    pub name: String,
}
