//! Opener tests.

mod roundtrip_tests;
