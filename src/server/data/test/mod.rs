mod group;
mod membership;
mod student;
