use super::{MarketPlace, News, NewsTitle};

/// A validated news payload, ready to be written to a store.
#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: NewsTitle,
    pub content: String,
    pub market_place: MarketPlace,
}

impl TryFrom<News> for NewNews {
    type Error = String;

    fn try_from(value: News) -> Result<Self, Self::Error> {
        let title = NewsTitle::parse(value.title)?;
        Ok(Self {
            title,
            content: value.content,
            market_place: value.market_place,
        })
    }
}

impl NewNews {
    pub fn into_news(self, id: i64) -> News {
        News {
            id: Some(id),
            title: self.title.as_ref().to_owned(),
            content: self.content,
            market_place: self.market_place,
        }
    }
}
