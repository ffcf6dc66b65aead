use sea_orm::*;
use anyhow::Result;
use chrono::NaiveDate;
use fake::faker::chrono::en::Date;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::DomainSuffix;
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;
use tracing::info;

use crate::database::entities::{access_records, topics, webpages};

/// Topic vocabulary the generated webpages are filed under.
pub const TOPICS: [&str; 5] = ["Search", "Social", "Marketplace", "News", "Games"];

/// Generate `entries` fake access record entries.
///
/// Each entry picks a random topic, invents a webpage under it, and stamps
/// that webpage with a random access date. All three writes are
/// get-or-create, so colliding values reuse the existing rows.
pub async fn populate(db: &DatabaseConnection, entries: u32) -> Result<()> {
    info!("Generating {} access record entries", entries);

    for _ in 0..entries {
        let topic_name = TOPICS[rand::thread_rng().gen_range(0..TOPICS.len())];
        let topic = find_or_create_topic(db, topic_name).await?;

        let url = fake_url();
        let name: String = CompanyName().fake();
        let date: NaiveDate = Date().fake();

        let webpage = find_or_create_webpage(db, topic.id, &url, &name).await?;
        find_or_create_access_record(db, webpage.id, date).await?;
    }

    info!("Generated {} entries", entries);
    Ok(())
}

pub async fn find_or_create_topic(db: &DatabaseConnection, name: &str) -> Result<topics::Model> {
    let existing = topics::Entity::find()
        .filter(topics::Column::Name.eq(name))
        .one(db)
        .await?;

    if let Some(topic) = existing {
        return Ok(topic);
    }

    let topic = topics::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };

    Ok(topic.insert(db).await?)
}

pub async fn find_or_create_webpage(
    db: &DatabaseConnection,
    topic_id: i32,
    url: &str,
    name: &str,
) -> Result<webpages::Model> {
    let existing = webpages::Entity::find()
        .filter(webpages::Column::TopicId.eq(topic_id))
        .filter(webpages::Column::Url.eq(url))
        .filter(webpages::Column::Name.eq(name))
        .one(db)
        .await?;

    if let Some(webpage) = existing {
        return Ok(webpage);
    }

    let webpage = webpages::ActiveModel {
        topic_id: Set(topic_id),
        url: Set(url.to_string()),
        name: Set(name.to_string()),
        ..Default::default()
    };

    Ok(webpage.insert(db).await?)
}

pub async fn find_or_create_access_record(
    db: &DatabaseConnection,
    webpage_id: i32,
    date: NaiveDate,
) -> Result<access_records::Model> {
    let existing = access_records::Entity::find()
        .filter(access_records::Column::WebpageId.eq(webpage_id))
        .filter(access_records::Column::Date.eq(date))
        .one(db)
        .await?;

    if let Some(record) = existing {
        return Ok(record);
    }

    let record = access_records::ActiveModel {
        webpage_id: Set(webpage_id),
        date: Set(date),
        ..Default::default()
    };

    Ok(record.insert(db).await?)
}

fn fake_url() -> String {
    let word: String = Word().fake();
    let suffix: String = DomainSuffix().fake();
    format!("https://www.{}.{}/", word.to_lowercase(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_url_looks_like_a_url() {
        let url = fake_url();
        assert!(url.starts_with("https://www."));
        assert!(url.ends_with('/'));
        assert!(url.trim_start_matches("https://www.").contains('.'));
    }

    #[test]
    fn topic_vocabulary_is_fixed() {
        assert_eq!(TOPICS.len(), 5);
        assert!(TOPICS.contains(&"News"));
    }
}
