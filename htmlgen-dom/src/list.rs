//! Ordered, unordered and description lists.

use htmlgen::{Attribute, Element, HtmlElement, Item, Shared};

use crate::macros::append_shared;

fn create_item(list: &mut Element, child: Item) -> Shared<ListItem> {
    let mut item = ListItem::new();
    if child.as_text() != Some("") {
        item.append(child);
    }
    append_shared(list, item)
}

macro_rules! list_items {
    ($name:ident) => {
        impl $name {
            /// Appends a [`ListItem`] holding `child` and returns it.
            ///
            /// An empty text child creates an empty item.
            pub fn create_item(&mut self, child: impl Into<Item>) -> Shared<ListItem> {
                create_item(&mut self.element, child.into())
            }

            /// Appends one [`ListItem`] per child.
            pub fn create_items<I>(&mut self, children: I) -> Vec<Shared<ListItem>>
            where
                I: IntoIterator,
                I::Item: Into<Item>,
            {
                children
                    .into_iter()
                    .map(|child| self.create_item(child))
                    .collect()
            }
        }
    };
}

container!(
    /// An `<ol>` of [`ListItem`]s.
    OrderedList,
    "ol"
);

list_items!(OrderedList);

impl OrderedList {
    const START: Attribute<i64> = Attribute::with_default("start", 1);

    /// The number of the first item, 1 unless set.
    pub fn start(&self) -> Option<i64> {
        self.get(&Self::START)
    }

    /// Sets the number of the first item.
    pub fn set_start(&mut self, start: i64) {
        self.set(&Self::START, Some(start));
    }
}

container!(
    /// A `<ul>` of [`ListItem`]s.
    UnorderedList,
    "ul"
);

list_items!(UnorderedList);

container!(
    /// An `<li>` inside an [`OrderedList`] or [`UnorderedList`].
    ListItem,
    "li"
);

container!(
    /// A `<dl>` of terms and their descriptions.
    DescriptionList,
    "dl"
);

impl DescriptionList {
    /// Appends a term and its description, returning both.
    pub fn create_item(
        &mut self,
        term: impl Into<Item>,
        description: impl Into<Item>,
    ) -> (Shared<DescriptionTerm>, Shared<DescriptionDefinition>) {
        let term = append_shared(self, DescriptionTerm::with_content([term]));
        let description = append_shared(self, DescriptionDefinition::with_content([description]));
        (term, description)
    }
}

container!(
    /// A `<dt>` term inside a [`DescriptionList`].
    DescriptionTerm,
    "dt"
);

container!(
    /// A `<dd>` description inside a [`DescriptionList`].
    DescriptionDefinition,
    "dd"
);

#[cfg(test)]
mod tests {
    use htmlgen::GeneratorExt;

    use super::*;

    #[test]
    fn test_create_items() {
        let mut list = OrderedList::new();
        let items = list.create_items(["A", "B"]);
        assert_eq!(items.len(), 2);
        assert_eq!(list.render(), "<ol><li>A</li><li>B</li></ol>");
    }

    #[test]
    fn test_created_item_stays_editable() {
        let mut list = UnorderedList::new();
        let item = list.create_item("");
        item.borrow_mut().add_css_class("first");
        item.borrow_mut().append("Late");
        assert_eq!(list.render(), r#"<ul><li class="first">Late</li></ul>"#);
    }

    #[test]
    fn test_ordered_list_start() {
        let mut list = OrderedList::new();
        assert_eq!(list.start(), Some(1));
        list.set_start(5);
        assert_eq!(list.render(), r#"<ol start="5"></ol>"#);
        list.set_start(1);
        assert_eq!(list.render(), "<ol></ol>");
    }

    #[test]
    fn test_description_list() {
        let mut list = DescriptionList::new();
        let (term, _) = list.create_item("Term", "Long description.");
        term.borrow_mut().add_css_class("my-term");
        assert_eq!(
            list.render(),
            r#"<dl><dt class="my-term">Term</dt><dd>Long description.</dd></dl>"#
        );
    }
}
