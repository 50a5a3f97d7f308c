pub use super::group::Entity as Group;
pub use super::student::Entity as Student;
pub use super::student_group::Entity as StudentGroup;
