//! Integration tests for branchplay

mod helpers;

mod cli_test;
mod scenario_test;
mod story_test;
