mod alerts;
mod health_check;
mod helpers;
mod news;
mod pagination;

pub use alerts::AlertHeaders;
pub use health_check::health_check;
pub use news::*;
pub use pagination::pagination_headers;
