mod market_place;
mod new_news;
mod news;
mod news_title;
mod page;
mod subscriber_email;
mod subscription;

pub use market_place::MarketPlace;
pub use new_news::NewNews;
pub use news::News;
pub use news_title::NewsTitle;
pub use page::{Page, PageQuery, PageRequest};
pub use subscriber_email::SubscriberEmail;
pub use subscription::{SubscribedUser, Subscription};
