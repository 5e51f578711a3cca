pub mod months;
pub mod pages;

pub use pages::MonthPage;
