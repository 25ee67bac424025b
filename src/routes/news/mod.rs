mod endpoint;
mod errors;
mod handlers;
mod helpers;

pub use endpoint::NewsEndpoint;
pub use errors::NewsError;
pub use handlers::{
    create_news, delete_news, get_news, list_market_place_news, list_news, update_news,
};
