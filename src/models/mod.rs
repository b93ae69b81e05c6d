pub mod invoice;
pub mod user;

pub use invoice::Invoice;
pub use user::User;
