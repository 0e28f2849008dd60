pub mod dispatcher;
pub mod error;
pub mod request;
pub mod validation;

pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use error::{ApplicationError, ApplicationResult};
pub use request::{Request, RequestHandler};
