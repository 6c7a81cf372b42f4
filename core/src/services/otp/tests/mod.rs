//! Tests for the OTP service

mod sweeper_tests;
