mod error;
mod uploads;
