//! Integration tests for Newsbrief
//!
//! These tests use wiremock to serve article pages and exercise the
//! submission workflow and the web front end end-to-end.

mod common;
mod web_tests;
mod workflow_tests;
