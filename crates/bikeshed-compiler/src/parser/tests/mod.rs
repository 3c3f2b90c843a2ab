mod definitions_tests;
mod members_tests;
mod types_tests;
