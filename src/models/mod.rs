pub mod event;
pub mod seat;

pub use event::Event;
pub use seat::Seat;
