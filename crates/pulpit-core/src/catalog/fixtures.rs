//! Built-in sample content.
//!
//! Sermons carry fixed dates. Declarations are stamped relative to the
//! moment the seed is built, so a fresh session always shows words from
//! "today".

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::{DeclarationCategory, PropheticDeclaration, Sermon, SermonCategory};

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn thumbnail(path: &str) -> String {
    format!("https://images.pexels.com/photos/{path}?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop")
}

fn midnight_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn sermon(
    id: u32,
    title: &str,
    description: &str,
    date: (i32, u32, u32),
    duration: &str,
    photo: &str,
    category: SermonCategory,
    views: u64,
) -> Sermon {
    Sermon {
        id,
        title: title.into(),
        description: description.into(),
        date: midnight_utc(date.0, date.1, date.2),
        duration: duration.into(),
        thumbnail: thumbnail(photo),
        video_url: VIDEO_URL.into(),
        audio_url: format!("https://soundcloud.com/example{id}"),
        category,
        views,
    }
}

/// The sample sermon library, newest first.
pub fn sermons() -> Vec<Sermon> {
    vec![
        sermon(
            1,
            "The Power of Faith in Difficult Times",
            "Discover how faith can move mountains and transform your circumstances, even in the darkest moments of life. This powerful message will strengthen your belief and help you overcome any challenge.",
            (2024, 1, 15),
            "45:30",
            "8468/cross-sunset-sunrise-hill.jpg",
            SermonCategory::Faith,
            1250,
        ),
        sermon(
            2,
            "Walking in Divine Purpose",
            "Understanding God's plan for your life and how to align yourself with His divine purpose and calling. Learn to discern His voice and follow His leading in every season.",
            (2024, 1, 8),
            "52:15",
            "289586/pexels-photo-289586.jpeg",
            SermonCategory::Purpose,
            980,
        ),
        sermon(
            3,
            "The Healing Power of God",
            "Testimonies and biblical truths about God's desire and power to heal every sickness and disease. Witness miraculous healings and learn to receive your breakthrough.",
            (2024, 1, 1),
            "38:45",
            "236147/pexels-photo-236147.jpeg",
            SermonCategory::Healing,
            1500,
        ),
        sermon(
            4,
            "Breakthrough in Prayer",
            "Learn the secrets of effective prayer and how to experience breakthrough in your prayer life. Discover different types of prayer and how to pray with power and authority.",
            (2023, 12, 25),
            "41:20",
            "208315/pexels-photo-208315.jpeg",
            SermonCategory::Prayer,
            875,
        ),
        sermon(
            5,
            "Living in God's Abundance",
            "Discover God's desire for you to live abundantly in every area of your life - spiritually, physically, and financially. Learn to receive and steward His blessings.",
            (2023, 12, 18),
            "47:10",
            "301614/pexels-photo-301614.jpeg",
            SermonCategory::Prosperity,
            1100,
        ),
        sermon(
            6,
            "The Great Commission",
            "Understanding our call to evangelize and make disciples of all nations in these end times. Learn practical ways to share the gospel and impact your community.",
            (2023, 12, 11),
            "43:55",
            "161172/highway-the-way-forward-road-marking-arrow-161172.jpeg",
            SermonCategory::Evangelism,
            750,
        ),
        sermon(
            7,
            "Spiritual Warfare and Victory",
            "Learn about the spiritual battles we face and how to walk in victory through Christ. Understand your authority as a believer and how to overcome the enemy's schemes.",
            (2023, 12, 4),
            "49:25",
            "209832/pexels-photo-209832.jpeg",
            SermonCategory::SpiritualWarfare,
            1350,
        ),
        sermon(
            8,
            "The Love of God",
            "Experience the unconditional love of God that surpasses all understanding. Learn how His love transforms lives and gives us the power to love others unconditionally.",
            (2023, 11, 27),
            "44:18",
            "346529/pexels-photo-346529.jpeg",
            SermonCategory::Love,
            920,
        ),
    ]
}

/// Today's declarations, stamped relative to `now`.
pub fn prophetic_declarations(now: DateTime<Utc>) -> Vec<PropheticDeclaration> {
    let entries: [(&str, &str, Duration, DeclarationCategory, u64); 5] = [
        (
            "Breakthrough is Coming",
            "The Lord says: 'I am opening doors that no man can shut in your life. The season of waiting is coming to an end, and breakthrough is imminent. Fear not, for I am with you always.'",
            Duration::zero(),
            DeclarationCategory::PropheticDeclaration,
            1250,
        ),
        (
            "Divine Restoration",
            "Thus says the Lord: 'What the enemy has stolen, I will restore double. Your lost opportunities, broken relationships, and defeated dreams - I am making all things new in this season.'",
            Duration::minutes(30),
            DeclarationCategory::PropheticWord,
            980,
        ),
        (
            "Fear is Defeated",
            "The Spirit of the Lord declares: 'Perfect love casts out all fear. I have not given you a spirit of fear, but of power, love, and sound mind. Walk boldly in My promises.'",
            Duration::hours(2),
            DeclarationCategory::PropheticDeclaration,
            1680,
        ),
        (
            "Divine Connections Alert",
            "Word of Knowledge: The Lord is orchestrating divine connections in this season. Prepare your heart for supernatural alignments and partnerships that will accelerate your destiny.",
            Duration::hours(4),
            DeclarationCategory::WordOfKnowledge,
            2100,
        ),
        (
            "Shift is Coming",
            "Prophetic Alert: A major shift is coming to the body of Christ. Get ready for acceleration, supernatural increase, and unprecedented favor. The Lord is doing a new thing!",
            Duration::hours(6),
            DeclarationCategory::PropheticAlert,
            1890,
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (title, content, age, category, views))| PropheticDeclaration {
            id: i as u32 + 1,
            title: title.into(),
            content: content.into(),
            timestamp: now - age,
            category,
            views,
        })
        .collect()
}
