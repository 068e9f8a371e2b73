pub mod examples;
pub mod headless;
pub mod keyboard;
