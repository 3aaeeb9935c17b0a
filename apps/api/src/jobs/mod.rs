// Mock job board and placeholder matching. No real algorithm lives here.

pub mod catalog;
pub mod handlers;
pub mod matching;
