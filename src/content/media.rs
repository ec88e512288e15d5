use crate::types::{Photo, Service, Testimonial};
use site_core::playlist::AudioTrack;
use site_core::video::{VideoItem, VideoSource};

pub const HERO_PHRASES: [&str; 3] = ["And Win Today", "Win Tomorrow", "And Win Forever"];

pub fn audio_tracks() -> Vec<AudioTrack> {
    let track = |id, title, artist, category, duration, date| AudioTrack {
        id,
        title,
        artist,
        category,
        duration,
        date,
        audio_url: None,
    };
    vec![
        track(1, "Walking in Faith During Uncertain Times", "Pastor Evelyn Joshua", "Sermon", "45:30", "Nov 17, 2024"),
        track(2, "Amazing Grace - Hymn Instrumental", "Church Choir", "Worship Music", "4:12", "Nov 10, 2024"),
        track(3, "Daily Devotional - Tuesday Message", "Pastor Evelyn Joshua", "Devotional", "8:45", "Nov 16, 2024"),
        track(4, "Praise and Worship Medley", "Church Band", "Worship Music", "12:30", "Nov 3, 2024"),
        track(5, "The Power of Prayer - Part 1", "Pastor Evelyn Joshua", "Teaching Series", "38:15", "Oct 20, 2024"),
    ]
}

pub fn sermon_videos() -> Vec<VideoItem> {
    let video = |id: &str, title: &str, thumbnail: &str, description: &str, url: &str| VideoItem {
        id: id.to_string(),
        title: title.to_string(),
        thumbnail: thumbnail.to_string(),
        description: Some(description.to_string()),
        source: VideoSource::from_url(url),
    };
    vec![
        video(
            "1",
            "THE TRUE SOLUTION",
            "/sermonpix/sermon.jpeg",
            "What is the true solution to life's challenges? When all that glitters fades and worldly possessions can't fill the emptiness within, where do you turn?",
            "https://www.youtube.com/embed/xCIwOK0Shx8?si=pkj7CFLmRu4kviRS",
        ),
        video(
            "2",
            "The Character of a True Believer",
            "/sermonpix/sermon2.jpeg",
            "What is the character of a true believer? Is it about the words of their mouth, their outward appearance, or the paraphernalia of their Christian office?",
            "https://www.facebook.com/plugins/video.php?href=https%3A%2F%2Fwww.facebook.com%2Fwatch%2F%3Fv%3D1340651834319725&show_text=0&width=560&mute=0",
        ),
        video(
            "3",
            "WATCH AND PRAY",
            "/sermonpix/watchandpray.jpeg",
            "Reading from Numbers 21:4-9, Pastor Evelyn Joshua speaks on faith, the promise of healing and salvation, and how the believer can look up to Jesus in order to live.",
            "https://www.youtube.com/embed/03dvo9F4zww?si=rLnfzBs4PUPwvkR6",
        ),
        video(
            "4",
            "INVITING GOD'S PRESENCE AND POWER",
            "/sermonpix/invitinggods.jpeg",
            "What does it take to invite God's presence and power into your situation?",
            "https://www.youtube.com/embed/qTM0g-OOzcs?si=ryT3efLCXy61Tis7",
        ),
        video(
            "5",
            "A WORTHY PARTNER IN GOD'S WORK",
            "/sermonpix/worthypartner.jpeg",
            "What is it about a threefold cord that makes it so special, as affirmed by the Scriptures?",
            "https://www.youtube.com/embed/CLRYl-eb34Y?si=HaNt6qWTctqCImwH",
        ),
        video(
            "6",
            "THE POWER OF BELIEF",
            "/sermonpix/belief.jpeg",
            "Reading from John 14:12, Pastor Evelyn Joshua speaks categorically about the link between faith and confession.",
            "https://www.youtube.com/embed/Q6FrrncMEDM?si=aQtxYlHFjYWknqFj",
        ),
        video(
            "7",
            "GOD'S LOVE",
            "/sermonpix/Godslove.jpeg",
            "As a Christian, do you know the source of power for exploits in the spiritual realm that manifest in the physical?",
            "https://www.youtube.com/embed/4LpXP2Gc1bo?si=SSkRBm7yYIBA0zjp",
        ),
    ]
}

#[derive(Clone, Copy, Debug)]
pub struct FeaturedSermon {
    pub title: &'static str,
    pub preacher: &'static str,
    pub poster: &'static str,
    pub embed_url: &'static str,
    pub watch_url: &'static str,
}

pub const FEATURED_SERMON: FeaturedSermon = FeaturedSermon {
    title: "Divine Healing",
    preacher: "Pastor Evelyn Joshua",
    poster: "/sermonpix/grateful.jpeg",
    embed_url: "https://www.facebook.com/plugins/video.php?height=314&href=https%3A%2F%2Fwww.facebook.com%2FSCOANLegacy%2Fvideos%2F1416204296919341%2F&show_text=false&width=560&t=0",
    watch_url: "https://www.stream.emmanuel.tv/title/divine-healing-%7C-pastor-evelyn-joshua-sermon/en?id=693371d660b2170ab47749e6&type=vod&isFromTabLayout=true",
};

pub static CHURCH_PHOTOS: &[Photo] = &[
    Photo { src: "/churchvisit/Church1.jpg", alt: "The SCOAN Church - Leadership and congregation" },
    Photo { src: "/churchvisit/insidechurch.jpg", alt: "The SCOAN Church - Worship and prayer service" },
    Photo { src: "/churchvisit/insidechurch2.jpg", alt: "The SCOAN Church - Worship and prayer service" },
    Photo { src: "/churchvisit/insidechurch1.jpg", alt: "The SCOAN Church - Worship and prayer service" },
    Photo { src: "/churchvisit/Church2.jpg", alt: "The SCOAN Church - Worship and prayer service" },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Community Member",
        text: "This ministry has transformed my spiritual journey. The guidance and community support have been invaluable.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Volunteer",
        text: "Being part of this faith community has given me purpose and meaningful connections with others.",
    },
    Testimonial {
        name: "Emma Williams",
        role: "Youth Group Participant",
        text: "The youth ministry programs helped me discover my faith during an important time in my life.",
    },
];

pub static SERVICES: &[Service] = &[
    Service { title: "Spiritual Guidance", description: "Personal counseling and spiritual mentorship to deepen your faith journey." },
    Service { title: "Community Fellowship", description: "Connect with believers in a welcoming environment of shared values." },
    Service { title: "Scripture Study", description: "Deep dives into biblical teachings and theological understanding." },
    Service { title: "Outreach Programs", description: "Serving others and making a positive impact in our community." },
    Service { title: "Worship & Praise", description: "Uplifting worship experiences that nurture the soul and spirit." },
    Service { title: "Youth Ministry", description: "Empowering the next generation with faith and purpose." },
];
