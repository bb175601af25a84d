//! Common component tests.
