pub mod fps;
pub mod history;
pub mod palette;
pub mod scoring;
