//! Embedded video.

use htmlgen::{Attribute, BooleanAttribute, Element, HtmlElement, TextAttribute};

htmlgen::attribute_enum! {
    /// How much of a video the browser loads ahead of playback.
    pub enum Preload {
        /// Nothing.
        None = "none",
        /// Only metadata such as the duration.
        Metadata = "metadata",
        /// The whole file, if the browser sees fit.
        Auto = "auto",
    }
}

/// A `<video>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    element: Element,
}

impl Video {
    const CONTROLS: BooleanAttribute = BooleanAttribute::new("controls");
    const POSTER: TextAttribute = TextAttribute::new("poster");
    const PRELOAD: Attribute<Preload> = Attribute::new("preload");

    /// Creates a video playing `src`.
    pub fn new(src: &str) -> Self {
        let mut element = Element::new("video");
        element.set_attribute("src", src);
        Self { element }
    }

    /// Whether playback controls are shown.
    pub fn controls(&self) -> bool {
        self.get(&Self::CONTROLS)
    }

    /// Shows or hides playback controls.
    pub fn set_controls(&mut self, controls: bool) {
        self.set(&Self::CONTROLS, controls);
    }

    /// The image shown before playback.
    pub fn poster(&self) -> Option<String> {
        self.get(&Self::POSTER)
    }

    /// Sets or removes the poster image.
    pub fn set_poster(&mut self, poster: Option<&str>) {
        self.set(&Self::POSTER, poster.map(str::to_owned));
    }

    /// The preload hint. Unknown values read as `None`.
    pub fn preload(&self) -> Option<Preload> {
        self.get(&Self::PRELOAD)
    }

    /// Sets or removes the preload hint.
    pub fn set_preload(&mut self, preload: Option<Preload>) {
        self.set(&Self::PRELOAD, preload);
    }
}

element_type!(Video);
