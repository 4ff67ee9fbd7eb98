//! Pure data structures: orders, catalog parts and payment values.

pub mod order;
pub mod part;
pub mod payment;

pub use order::*;
pub use part::*;
pub use payment::*;
