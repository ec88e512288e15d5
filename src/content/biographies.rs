use crate::types::{ImageSide, Slide, SlideImage};
use site_core::routes::AboutPage;

const fn image(src: &'static str, alt: &'static str, side: ImageSide) -> SlideImage {
    SlideImage { src, alt, side }
}

pub fn slides_for(page: AboutPage) -> &'static [Slide] {
    match page {
        AboutPage::TbJoshua => TB_JOSHUA,
        AboutPage::EvelynJoshua => EVELYN_JOSHUA,
        AboutPage::Scoan => SCOAN,
        AboutPage::EmmanuelTv => EMMANUEL_TV,
    }
}

const TB: &str = "Prophet T.B. Joshua";

pub static TB_JOSHUA: &[Slide] = &[
    Slide {
        id: 1,
        title: "Prophetic Birth Of TB Joshua",
        subtitle: TB,
        paragraphs: &[
            "In the mid-1800s, in the rural community of Arigidi in present-day Ondo State, a warrior and farmer named Balogun Okoorun prophesied that a man of worldwide following would one day emerge from that place.",
            "Temitope Balogun, later known as TB Joshua, was born a century later on 12 June 1963, after spending fifteen months in his mother's womb.",
        ],
        image: image("/daddypix/dad1.jpg", "Prophet T.B. Joshua", ImageSide::Right),
    },
    Slide {
        id: 2,
        title: "Naming Ceremony",
        subtitle: TB,
        paragraphs: &[
            "On the day of his naming ceremony a stone from a nearby blasting site crashed through the roof and set his baby net alight, yet the child was found unharmed.",
            "His parents named him Temitope: 'What You (God) have done for me is worthy of thanks'.",
        ],
        image: image("/daddypix/dad2.jpg", "Young T.B. Joshua", ImageSide::Left),
    },
    Slide {
        id: 3,
        title: "Early Life Of TB Joshua",
        subtitle: TB,
        paragraphs: &[
            "As a pupil at St. Stephen's Anglican Primary School he led the school prayers and was nicknamed 'small pastor' by classmates and teachers.",
            "When a man armed with a cutlass stormed the school, the young Joshua calmly asked for the weapon in Jesus' name, and it was handed over.",
        ],
        image: image("/daddypix/dad3.jpg", "SCOAN Building", ImageSide::Right),
    },
    Slide {
        id: 4,
        title: "Joshua's Epileptic Education",
        subtitle: TB,
        paragraphs: &[
            "His schooling was repeatedly interrupted by poverty. He worked on farms and carried loads to pay his way, studying whenever he could.",
        ],
        image: image("/daddypix/dad4.jpg", "T.B. Joshua in his youth", ImageSide::Left),
    },
    Slide {
        id: 5,
        title: "Joshua's Military Ambitions Aborted",
        subtitle: TB,
        paragraphs: &[
            "He set out to join the Nigerian Army, but a train breakdown on the way to the enlistment kept him from ever arriving.",
        ],
        image: image("/daddypix/dad5.jpg", "T.B. Joshua", ImageSide::Right),
    },
    Slide {
        id: 6,
        title: "Divine Calling – Life After Life",
        subtitle: TB,
        paragraphs: &[
            "After forty days of prayer and fasting on the Prayer Mountain, he described receiving a divine commission to begin his ministry.",
        ],
        image: image("/daddypix/dad6.jpg", "T.B. Joshua in prayer", ImageSide::Left),
    },
    Slide {
        id: 7,
        title: "Joshua's Humble Beginnings",
        subtitle: TB,
        paragraphs: &[
            "The ministry began with eight members in a small shack in Agodo, Egbe, Lagos, where the first services were held.",
        ],
        image: image("/daddypix/dad7.jpg", "Early church gathering", ImageSide::Left),
    },
    Slide {
        id: 8,
        title: "Move To Ikotun-Egbe",
        subtitle: TB,
        paragraphs: &[
            "Flooding and growth forced several moves before the church settled at its present site in Ikotun-Egbe.",
        ],
        image: image("/daddypix/dad8.jpg", "The church at Ikotun-Egbe", ImageSide::Left),
    },
    Slide {
        id: 9,
        title: "Joshua's Divine Union",
        subtitle: TB,
        paragraphs: &[
            "In 1990 he married Evelyn Onyisi Akabude, who would stand beside him in the ministry for over three decades.",
        ],
        image: image("/daddypix/mumanddad.jpg", "T.B. Joshua and Evelyn Joshua", ImageSide::Left),
    },
    Slide {
        id: 10,
        title: "Anointing Attracts",
        subtitle: TB,
        paragraphs: &[
            "Visitors from across the world travelled to The SCOAN in Lagos, drawn by the message of healing, deliverance and charity.",
        ],
        image: image("/daddypix/dad10.jpg", "Congregation at The SCOAN", ImageSide::Left),
    },
];

const PEJ: &str = "Pastor Evelyn Onyisi Joshua";

pub static EVELYN_JOSHUA: &[Slide] = &[
    Slide {
        id: 1,
        title: "Introduction",
        subtitle: "Pst. Evelyn Onyisi Joshua",
        paragraphs: &[
            "Pastor Evelyn Joshua leads The Synagogue, Church Of All Nations and Emmanuel TV, continuing the work of healing, deliverance and charity.",
        ],
        image: image("/Evelyn-Joshua3.jpg", "Pastor Evelyn Joshua", ImageSide::Right),
    },
    Slide {
        id: 2,
        title: "Family Background and Education",
        subtitle: PEJ,
        paragraphs: &[
            "She grew up in Delta State, Nigeria, and completed her education before joining the ministry in its early years.",
        ],
        image: image("/Evelyn-Joshua3.jpg", "Pastor Evelyn Joshua", ImageSide::Left),
    },
    Slide {
        id: 3,
        title: "Marriage",
        subtitle: PEJ,
        paragraphs: &[
            "She married Prophet T.B. Joshua in 1990 and they were blessed with three children.",
        ],
        image: image("/mumanddad.jpg", "Prophet T.B. Joshua and Pastor Evelyn Joshua", ImageSide::Right),
    },
    Slide {
        id: 4,
        title: "Ministry",
        subtitle: PEJ,
        paragraphs: &[
            "For decades she served alongside her husband, overseeing church administration and the welfare of members and visitors.",
            "Her messages focus on faith, prayer and the practical life of the believer.",
        ],
        image: image("/Evelyn-Joshua3.jpg", "Pastor Evelyn Joshua preaching", ImageSide::Left),
    },
    Slide {
        id: 5,
        title: "The New Dawn and Mantle of Leadership",
        subtitle: PEJ,
        paragraphs: &[
            "Since 2021 she has led The SCOAN, Emmanuel TV and the Emmanuel Global Network.",
        ],
        image: image("/Evelyn-Joshua3.jpg", "Pastor Evelyn Joshua", ImageSide::Right),
    },
    Slide {
        id: 6,
        title: "PEJ AND THE LOVE FOR NATURE",
        subtitle: PEJ,
        paragraphs: &[
            "Outside the pulpit she is known for her love of gardens and the natural world, which often features in her teaching.",
        ],
        image: image("/Evelyn-Joshua3.jpg", "Pastor Evelyn Joshua outdoors", ImageSide::Left),
    },
];

const SCOAN_SUB: &str = "The Synagogue, Church Of All Nations";

pub static SCOAN: &[Slide] = &[
    Slide {
        id: 1,
        title: "Introduction",
        subtitle: SCOAN_SUB,
        paragraphs: &[
            "The Synagogue, Church Of All Nations is a Christian ministry headquartered in Lagos, Nigeria, welcoming worshippers from every nation.",
        ],
        image: image("/churchvisit/Church2.jpg", "The SCOAN church building", ImageSide::Right),
    },
    Slide {
        id: 2,
        title: "All the Way Long",
        subtitle: SCOAN_SUB,
        paragraphs: &[
            "From a handful of members in 1987 the church grew through many relocations into one of the most visited ministries in Africa.",
        ],
        image: image("/churchvisit/insidechurch.jpg", "Inside The SCOAN", ImageSide::Left),
    },
    Slide {
        id: 3,
        title: "Everything Big Starts Little",
        subtitle: SCOAN_SUB,
        paragraphs: &[
            "The first services were held in a small shack. Each move brought more space and more people seeking prayer.",
        ],
        image: image("/churchvisit/insidechurch1.jpg", "Worship at The SCOAN", ImageSide::Right),
    },
    Slide {
        id: 4,
        title: "Church of All Nations",
        subtitle: SCOAN_SUB,
        paragraphs: &[
            "Today visitors from across the globe attend services, and the church supports education, healthcare and relief projects.",
        ],
        image: image("/churchvisit/Church1.jpg", "The SCOAN congregation", ImageSide::Left),
    },
];

pub static EMMANUEL_TV: &[Slide] = &[Slide {
    id: 1,
    title: "Spreading Messages of Love, Hope and Salvation through the Gospel of Jesus Christ",
    subtitle: "Emmanuel TV",
    paragraphs: &[
        "Emmanuel TV is the television station of The SCOAN, broadcasting services, testimonies and teaching around the world.",
        "Its programmes are streamed online and carried by satellite, reaching viewers in every continent.",
    ],
    image: image("/emmanueltv/logo.png", "Emmanuel TV logo", ImageSide::Right),
}];
