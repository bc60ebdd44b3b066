mod course;
mod objects;

pub use course::Course;
pub use objects::{CourseObject, CourseObjectKind};
