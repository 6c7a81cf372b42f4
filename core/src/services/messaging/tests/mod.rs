//! Tests for the messaging service
