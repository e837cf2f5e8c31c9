pub mod faculty;
