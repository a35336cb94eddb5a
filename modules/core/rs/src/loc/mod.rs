pub use orientation::Orientation;

mod orientation;
