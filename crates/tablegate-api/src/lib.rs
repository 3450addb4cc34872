// tablegate API Library
//
// REST layer for table schema administration: path/verb routing,
// content negotiation, and the XML / plain text schema codec.

pub mod codec;
pub mod error;
pub mod handlers;
pub mod negotiate;
pub mod router;
pub mod routes;

pub use error::ApiError;
pub use negotiate::{negotiate, Representation};
pub use router::{TableOperation, TableRequest, TableResourceRouter, TableResponse};
