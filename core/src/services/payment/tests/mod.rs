//! Tests for the payment service
