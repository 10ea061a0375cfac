mod admin_tests;
mod api_tests;
mod public_tests;
