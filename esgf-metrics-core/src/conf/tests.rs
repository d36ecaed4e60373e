mod duration_tests;
mod loader_tests;
