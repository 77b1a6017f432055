pub mod dto;

pub use dto::{PeakHour, PeakHourKey, RepeatCustomer, SalesTotals, TopDish};
