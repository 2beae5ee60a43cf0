//! Shared test utilities for mprs-db unit tests.
