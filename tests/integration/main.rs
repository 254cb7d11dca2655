//! Integration tests for devcli-demo.

mod cli_test;
mod playback_test;
