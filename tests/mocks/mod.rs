pub mod clerk_mock;
