mod into_iter;

pub use into_iter::IntoIter;
