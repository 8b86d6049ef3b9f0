// ABOUTME: Test helper modules shared by the HTTP integration tests
// ABOUTME: Re-exports the Axum request/response utilities

pub mod axum_test;
