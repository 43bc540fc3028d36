//! Integration tests for ansiwrap.

mod config_test;
mod helpers;
mod wrap_test;
