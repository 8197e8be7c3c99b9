use std::cell::Cell;
use std::rc::Rc;

use htmlgen::{
    Attribute, BooleanAttribute, Element, Error, FnGenerator, Generator, GeneratorExt,
    HtmlElement, HtmlJoinGenerator, Item, Items, IteratorGenerator, JoinGenerator, TextAttribute,
    VoidElement, shared,
};
use insta::assert_snapshot;

#[htmlgen_testhelpers::test]
fn text_input_scenario() {
    const NAME: TextAttribute = TextAttribute::with_default("name", "");
    const VALUE: TextAttribute = TextAttribute::with_default("value", "");

    let mut input = VoidElement::new("input");
    input.set_attribute("type", "text");
    input.set(&NAME, Some("desc".to_owned()));
    input.set(&VALUE, Some("hello".to_owned()));
    assert_eq!(
        input.render(),
        r#"<input name="desc" type="text" value="hello"/>"#
    );

    input.set(&VALUE, Some(String::new()));
    assert_eq!(input.render(), r#"<input name="desc" type="text"/>"#);
}

#[htmlgen_testhelpers::test]
fn nested_list_scenario() {
    let mut list = Element::new("ol");
    list.append(Element::new("li").with_child("A"));
    list.append(Element::new("li").with_child("B"));
    assert_eq!(list.render(), "<ol><li>A</li><li>B</li></ol>");
}

#[htmlgen_testhelpers::test]
fn data_attribute_scenario() {
    let mut div = Element::new("div");
    div.data_mut().insert("foo", "bar");
    div.data_mut().insert("abc", "x");
    assert_eq!(div.render(), r#"<div data-abc="x" data-foo="bar"></div>"#);
}

#[htmlgen_testhelpers::test]
fn join_scenario() {
    let join = JoinGenerator::new(", ", ["Hello", "World"]);
    let chunks: Vec<String> = join.chunks().map(|c| c.to_string()).collect();
    assert_eq!(chunks, ["Hello", ", ", "World"]);

    let empty = JoinGenerator::new(", ", Vec::<&str>::new());
    assert_eq!(empty.chunks().count(), 0);
}

#[htmlgen_testhelpers::test]
fn escaping_happens_once() {
    let mut inner = Element::new("em");
    inner.append("a & b");
    let mut outer = Element::new("p");
    outer.set_attribute("title", "x & y");
    outer.append(inner);
    outer.append("<&>");
    assert_eq!(
        outer.render(),
        r#"<p title="x &amp; y"><em>a &amp; b</em>&lt;&amp;&gt;</p>"#
    );
}

#[htmlgen_testhelpers::test]
fn default_values_are_suppressed() {
    const START: Attribute<i64> = Attribute::with_default("start", 1);
    const REVERSED: BooleanAttribute = BooleanAttribute::new("reversed");

    let mut list = Element::new("ol");
    list.set(&START, Some(1));
    list.set(&REVERSED, false);
    assert_eq!(list.render(), "<ol></ol>");
    assert_eq!(list.get(&START), Some(1));
}

#[htmlgen_testhelpers::test]
fn shared_child_stays_editable() {
    let item = shared(Element::new("li"));
    let mut list = Element::new("ul");
    list.append(item.clone());
    item.borrow_mut().append("late");
    item.borrow_mut().add_css_class("new");
    assert_eq!(list.render(), r#"<ul><li class="new">late</li></ul>"#);

    list.remove(item).unwrap();
    assert_eq!(list.render(), "<ul></ul>");
}

#[htmlgen_testhelpers::test]
fn infinite_children_stream() {
    let mut list = Element::new("ul");
    list.append(Item::node(IteratorGenerator::new(std::iter::repeat("<li>x</li>"))));
    let prefix: String = list.chunks().take(3).map(|c| c.to_string()).collect();
    assert_eq!(prefix, "<ul><li>x</li><li>x</li>");
}

#[htmlgen_testhelpers::test]
fn lazy_children_are_recomputed_per_render() {
    let counter = Rc::new(Cell::new(0));
    let c = counter.clone();
    let mut div = Element::new("div");
    div.append(Item::node(FnGenerator::new(move || {
        c.set(c.get() + 1);
        [format!("render {}", c.get())]
    })));
    assert_eq!(div.render(), "<div>render 1</div>");
    assert_eq!(div.render(), "<div>render 2</div>");
    assert_eq!(counter.get(), 2);
}

/// A custom node built on the core contract only.
struct Greeting {
    name: String,
}

impl Generator for Greeting {
    fn generate(&self) -> Items {
        let mut strong = Element::new("strong");
        strong.append(self.name.as_str());
        Box::new([Item::from("Hello, "), Item::from(strong), Item::from("!")].into_iter())
    }
}

#[htmlgen_testhelpers::test]
fn custom_generator() {
    let mut p = Element::new("p");
    p.append(Item::node(Greeting {
        name: "<you>".to_owned(),
    }));
    assert_eq!(p.render(), "<p>Hello, <strong>&lt;you&gt;</strong>!</p>");
}

#[htmlgen_testhelpers::test]
fn html_join_inside_element() {
    let mut p = Element::new("p");
    p.append(Item::node(HtmlJoinGenerator::new(
        " & ",
        ["Tom", "Jerry"],
    )));
    assert_eq!(p.render(), "<p>Tom &amp; Jerry</p>");
}

#[htmlgen_testhelpers::test]
fn invalid_id_is_rejected() {
    let mut div = Element::new("div");
    let err = div.set_id(Some("a b")).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { name: "id", .. }));
    assert_eq!(err.to_string(), r#"invalid id "a b": must not contain spaces"#);
}

#[htmlgen_testhelpers::test]
fn full_fragment_snapshot() {
    let mut table = Element::new("table");
    table.add_css_classes(["grid", "data"]);
    table.set_style("width", "100%");
    table.set_style("border-collapse", "collapse");
    let mut row = Element::new("tr");
    for cell in ["a", "b<c"] {
        row.append(Element::new("td").with_child(cell));
    }
    table.append(row);
    table.append(VoidElement::new("hr").with_attribute("title", "it's"));

    assert_snapshot!(
        table.render(),
        @r#"<table class="data grid" style="width: 100%; border-collapse: collapse"><tr><td>a</td><td>b&lt;c</td></tr><hr title="it&#x27;s"/></table>"#
    );
}

#[htmlgen_testhelpers::test]
fn writer_and_vec_outputs_match() {
    let div = Element::new("div").with_child("x");
    let mut out = Vec::new();
    htmlgen::to_writer(&mut out, &div).unwrap();
    assert_eq!(out, htmlgen::to_vec(&div));
    assert_eq!(htmlgen::to_string(&div), "<div>x</div>");
}
