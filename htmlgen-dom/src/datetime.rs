//! Machine-readable dates.

use htmlgen::timeutil::{format_date, format_datetime};
use htmlgen::{Element, HtmlElement};
use time::{Date, PrimitiveDateTime};

/// A `<time>` element with a machine-readable `datetime`.
///
/// ```
/// use htmlgen::GeneratorExt;
/// use htmlgen_dom::Time;
/// use time::macros::date;
///
/// let mut eve = Time::date(date!(2014 - 12 - 31));
/// eve.append("new year's eve");
/// assert_eq!(
///     eve.render(),
///     r#"<time datetime="2014-12-31">new year&#x27;s eve</time>"#,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Time {
    element: Element,
}

impl Time {
    fn with_datetime_attribute(value: String) -> Self {
        let mut element = Element::new("time");
        element.set_attribute("datetime", value);
        Self { element }
    }

    /// A calendar date, `YYYY-MM-DD`.
    pub fn date(date: Date) -> Self {
        Self::with_datetime_attribute(format_date(date))
    }

    /// A UTC date and time, `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn datetime(datetime: PrimitiveDateTime) -> Self {
        Self::with_datetime_attribute(format_datetime(datetime))
    }

    /// The `datetime` attribute.
    pub fn value(&self) -> Option<&str> {
        self.attribute("datetime")
    }
}

element_type!(Time);
