//! Property-based tests for selection and validation.
