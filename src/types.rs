/// Which side of a biography slide the photo sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
pub struct SlideImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub side: ImageSide,
}

/// One panel of a biography carousel.
#[derive(Clone, Copy, Debug)]
pub struct Slide {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paragraphs: &'static [&'static str],
    pub image: SlideImage,
}

#[derive(Clone, Copy, Debug)]
pub struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct CategoryDescription {
    pub title: &'static str,
    pub description: &'static str,
    pub read_more_url: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}
